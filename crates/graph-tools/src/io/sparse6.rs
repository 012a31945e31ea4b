use doubly_lexical_ordering::AdjacencyMatrix;

use crate::graph::{Graph, StaticGraph};
use crate::io::{format6, strip_prefix, FormatError, MAX_SPARSE_ORDER};

const PREFIX: char = ':';

/// The number of bits needed to write `n - 1` in binary.
fn vertex_bits(n: usize) -> usize {
    (usize::BITS - n.saturating_sub(1).leading_zeros()) as usize
}

struct BitWriter {
    bits: Vec<bool>,
    k: usize,
}

impl BitWriter {
    fn push(&mut self, b: bool, x: usize) {
        self.bits.push(b);
        self.bits.extend((0..self.k).rev().map(|i| (x >> i) & 1 == 1));
    }
}

/// Encode a graph in `sparse6`. Loops and parallel edges are kept.
pub fn to_sparse6(graph: &StaticGraph) -> String {
    let n = graph.order();
    let matrix = graph.matrix();
    let k = vertex_bits(n);
    let mut writer = BitWriter { bits: vec![], k };

    // Edges {u, v} with u <= v ordered by v, then u.
    let mut current = 0;
    for v in 0..n {
        for u in 0..=v {
            for _ in 0..matrix[u][v] {
                if v == current {
                    writer.push(false, u);
                } else if v == current + 1 {
                    writer.push(true, u);
                    current = v;
                } else {
                    writer.push(true, v);
                    writer.push(false, u);
                    current = v;
                }
            }
        }
    }

    let mut bits = writer.bits;
    let mut padding = (6 - bits.len() % 6) % 6;
    // Padding with ones would be read as an edge to n - 1 if n is a power of two.
    if k < 6 && n == 1 << k && current + 2 == n && padding > k {
        bits.push(false);
        padding -= 1;
    }
    bits.extend(std::iter::repeat(true).take(padding));

    let mut out = String::from(PREFIX);
    format6::encode_order(n, &mut out);
    format6::encode_bits(bits, &mut out);
    out
}

/// Decode a `sparse6` line.
///
/// Orders above [MAX_SPARSE_ORDER] are rejected with [FormatError::TooLarge].
pub fn from_sparse6(line: &str) -> Result<StaticGraph, FormatError> {
    let bytes = strip_prefix(line, PREFIX)?;
    let values = format6::values(bytes, 1)?;
    let (n, data) = format6::decode_order(&values)?;
    if n > MAX_SPARSE_ORDER {
        return Err(FormatError::TooLarge { order: n });
    }
    let k = vertex_bits(n);

    let bits: Vec<bool> = format6::bits(data).collect();
    let mut matrix: AdjacencyMatrix = vec![vec![0; n]; n];
    let mut v = 0;
    for block in bits.chunks_exact(k + 1) {
        let x = block[1..].iter().fold(0, |x, &bit| (x << 1) | bit as usize);
        if block[0] {
            v += 1;
        }
        if x > v {
            v = x;
        } else if v < n {
            matrix[x][v] = matrix[x][v].saturating_add(1);
            if x != v {
                matrix[v][x] = matrix[v][x].saturating_add(1);
            }
        }
        if v >= n {
            break;
        }
    }
    Ok(StaticGraph::from_matrix_unchecked(matrix))
}
