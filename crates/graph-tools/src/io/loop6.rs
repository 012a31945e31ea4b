use doubly_lexical_ordering::AdjacencyMatrix;

use crate::graph::{Graph, StaticGraph};
use crate::io::{decode_dense, format6, strip_prefix, FormatError};

const PREFIX: char = ';';

/// The bits of the upper triangle including the diagonal, column by column.
fn upper_triangle(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(|j| (0..=j).map(move |i| (i, j)))
}

/// Encode a graph in `loop6`, the `graph6` format extended by the diagonal.
/// Parallel edges are written once.
pub fn to_loop6(graph: &StaticGraph) -> String {
    let n = graph.order();
    let matrix = graph.matrix();
    let mut out = String::from(PREFIX);
    format6::encode_order(n, &mut out);
    format6::encode_bits(upper_triangle(n).map(|(i, j)| matrix[i][j] != 0), &mut out);
    out
}

/// Decode a `loop6` line.
pub fn from_loop6(line: &str) -> Result<StaticGraph, FormatError> {
    let bytes = strip_prefix(line, PREFIX)?;
    let (n, data) = decode_dense(bytes, 1, |n| n.checked_mul(n + 1).map(|x| x / 2))?;
    let mut matrix: AdjacencyMatrix = vec![vec![0; n]; n];
    for ((i, j), bit) in upper_triangle(n).zip(format6::bits(&data)) {
        if bit {
            matrix[i][j] = 1;
            matrix[j][i] = 1;
        }
    }
    Ok(StaticGraph::from_matrix_unchecked(matrix))
}
