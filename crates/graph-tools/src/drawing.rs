//! Drawing graphs as SVG documents.

use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};

use tracing::instrument;

use crate::graph::Graph;

const MARGIN: f64 = 10.0;

/// An SVG document with lines and circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Svg {
    width: u32,
    height: u32,
    elements: Vec<Element>,
}

#[derive(Clone, Debug, PartialEq)]
enum Element {
    Line { x1: f64, y1: f64, x2: f64, y2: f64, stroke: String, stroke_width: u32 },
    Circle { cx: f64, cy: f64, r: f64, stroke: String, stroke_width: u32, fill: String },
}

impl Svg {
    /// Create an empty document.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, elements: vec![] }
    }

    /// The width of the document.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of the document.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of lines and circles drawn so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Draw a line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), stroke: &str, stroke_width: u32) {
        self.elements.push(Element::Line { x1, y1, x2, y2, stroke: stroke.to_string(), stroke_width });
    }

    /// Draw a circle around `(cx, cy)`.
    pub fn circle(&mut self, (cx, cy): (f64, f64), r: f64, stroke: &str, stroke_width: u32, fill: &str) {
        self.elements.push(Element::Circle {
            cx,
            cy,
            r,
            stroke: stroke.to_string(),
            stroke_width,
            fill: fill.to_string(),
        });
    }
}

impl Display for Svg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#, self.width, self.height)?;
        for element in &self.elements {
            match element {
                Element::Line { x1, y1, x2, y2, stroke, stroke_width } => writeln!(
                    f,
                    r#"<line x1="{x1:.3}" y1="{y1:.3}" x2="{x2:.3}" y2="{y2:.3}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#
                )?,
                Element::Circle { cx, cy, r, stroke, stroke_width, fill } => writeln!(
                    f,
                    r#"<circle cx="{cx:.3}" cy="{cy:.3}" r="{r:.3}" stroke="{stroke}" stroke-width="{stroke_width}" fill="{fill}"/>"#
                )?,
            }
        }
        write!(f, "</svg>")
    }
}

/// The positions of `n` vertices evenly spaced on a circle, starting at the
/// top and going counter-clockwise.
fn circle_positions(n: usize, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|v| {
            let angle = 2.0 * PI * v as f64 / n as f64;
            (center.0 - radius * angle.sin(), center.1 - radius * angle.cos())
        })
        .collect()
}

/// Draw a graph with its vertices evenly spaced on a circle.
///
/// The document is the `width` times `height` box with a margin on every side.
/// Every pair of adjacent vertices is connected by one line, loops are not
/// drawn. Vertices are drawn on top of the lines as circles of radius
/// `sin(π / 2n) · r` where `r` is the radius of the layout circle. `r` is
/// chosen such that the vertex circles stay inside the box.
#[instrument(skip_all, fields(n = graph.order()))]
pub fn circular<G: Graph>(graph: &G, width: u32, height: u32) -> Svg {
    let n = graph.order();
    let mut svg = Svg::new(width + 2 * MARGIN as u32, height + 2 * MARGIN as u32);
    let (w, h) = (width as f64, height as f64);
    let scale = (PI / (2.0 * n as f64)).sin();
    let radius = w.min(h) / 2.0 / (1.0 + scale);
    let center = (MARGIN + w / 2.0, MARGIN + h / 2.0);
    let positions = circle_positions(n, center, radius);

    let matrix = graph.matrix();
    for (u, row) in matrix.iter().enumerate() {
        for v in u + 1..n {
            if row[v] != 0 || matrix[v][u] != 0 {
                svg.line(positions[u], positions[v], "black", 1);
            }
        }
    }

    let vertex_radius = scale * radius;
    for &position in &positions {
        svg.circle(position, vertex_radius, "black", 1, "white");
    }
    svg
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::{complete_graph, cycle_graph, path_graph};

    #[test]
    fn empty_document() {
        let svg = Svg::new(100, 50);
        assert!(svg.is_empty());
        assert_eq!(svg.to_string(), "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\">\n</svg>");
    }

    #[test]
    fn elements() {
        let mut svg = Svg::new(10, 10);
        svg.line((0.0, 1.0), (2.5, 3.0), "black", 1);
        svg.circle((5.0, 5.0), 2.0, "red", 2, "white");
        let lines: Vec<String> = svg.to_string().lines().map(String::from).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], r#"<line x1="0.000" y1="1.000" x2="2.500" y2="3.000" stroke="black" stroke-width="1"/>"#);
        assert_eq!(lines[2], r#"<circle cx="5.000" cy="5.000" r="2.000" stroke="red" stroke-width="2" fill="white"/>"#);
    }

    #[test]
    fn positions_on_circle() {
        let positions = circle_positions(4, (0.0, 0.0), 1.0);
        let expected = [(0.0, -1.0), (-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)];
        for (&(x, y), &(ex, ey)) in positions.iter().zip(&expected) {
            assert!((x - ex).abs() < 1e-9 && (y - ey).abs() < 1e-9, "({x}, {y}) != ({ex}, {ey})");
        }
    }

    #[test]
    fn one_line_per_edge() {
        let svg = circular(&complete_graph(5), 200, 200);
        assert_eq!(svg.len(), 10 + 5);
        assert_eq!((svg.width(), svg.height()), (220, 220));

        let svg = circular(&cycle_graph(6), 300, 200);
        assert_eq!(svg.len(), 6 + 6);

        let svg = circular(&path_graph(0), 100, 100);
        assert!(svg.is_empty());
    }

    fn circles(svg: &Svg) -> Vec<(f64, f64, f64)> {
        svg.elements
            .iter()
            .filter_map(|e| match e {
                Element::Circle { cx, cy, r, .. } => Some((*cx, *cy, *r)),
                Element::Line { .. } => None,
            })
            .collect()
    }

    #[test]
    fn vertex_radius() {
        for n in [1, 2, 3, 6, 17] {
            let circles = circles(&circular(&path_graph(n), 100, 100));
            assert_eq!(circles.len(), n);
            // Distance of the first vertex to the center is the layout radius.
            let (x, y, r) = circles[0];
            let radius = ((x - 60.0).powi(2) + (y - 60.0).powi(2)).sqrt();
            let expected = (PI / (2.0 * n as f64)).sin() * radius;
            assert!((r - expected).abs() < 1e-9, "n={n}: {r} != {expected}");
        }
    }

    #[test]
    fn vertices_inside_margin() {
        for n in 1..12 {
            let svg = circular(&complete_graph(n), 300, 200);
            let (width, height) = (svg.width() as f64, svg.height() as f64);
            assert_eq!((width, height), (320.0, 220.0));
            for (x, y, r) in circles(&svg) {
                assert!(x - r >= MARGIN - 1e-9 && x + r <= width - MARGIN + 1e-9, "n={n}: x={x} r={r}");
                assert!(y - r >= MARGIN - 1e-9 && y + r <= height - MARGIN + 1e-9, "n={n}: y={y} r={r}");
            }
        }
    }
}
