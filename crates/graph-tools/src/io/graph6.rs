use doubly_lexical_ordering::AdjacencyMatrix;

use crate::graph::{Graph, StaticGraph};
use crate::io::{decode_dense, format6, FormatError};

/// The bits of the upper triangle, column by column.
fn upper_triangle(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n).flat_map(|j| (0..j).map(move |i| (i, j)))
}

/// Encode a graph in `graph6`. Loops are dropped and parallel edges are
/// written once.
pub fn to_graph6(graph: &StaticGraph) -> String {
    let n = graph.order();
    let matrix = graph.matrix();
    let mut out = String::new();
    format6::encode_order(n, &mut out);
    format6::encode_bits(upper_triangle(n).map(|(i, j)| matrix[i][j] != 0), &mut out);
    out
}

/// Decode a `graph6` line.
pub fn from_graph6(line: &str) -> Result<StaticGraph, FormatError> {
    if line.is_empty() {
        return Err(FormatError::Empty);
    }
    let (n, data) = decode_dense(line.as_bytes(), 0, |n| n.checked_mul(n.saturating_sub(1)).map(|x| x / 2))?;
    let mut matrix: AdjacencyMatrix = vec![vec![0; n]; n];
    for ((i, j), bit) in upper_triangle(n).zip(format6::bits(&data)) {
        if bit {
            matrix[i][j] = 1;
            matrix[j][i] = 1;
        }
    }
    Ok(StaticGraph::from_matrix_unchecked(matrix))
}
