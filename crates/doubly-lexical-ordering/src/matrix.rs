use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};
use tracing::instrument;

use crate::ordering::{doubly_lexical_ordering, DoublyLexicalOrdering};

/// A square matrix. Entry `[u][v]` is the number of edges from `u` to `v`.
pub type AdjacencyMatrix = Vec<Vec<u8>>;

/// Build the adjacency matrix of a graph.
///
/// Rows and columns are indexed by `graph.to_index(node)`. For undirected
/// graphs the matrix is symmetric. Parallel edges are counted, saturating at
/// `u8::MAX`.
pub fn adjacency_matrix<G>(graph: G) -> AdjacencyMatrix
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let n = graph.node_bound();
    let mut matrix = vec![vec![0_u8; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        for v in graph.neighbors(graph.from_index(i)) {
            let j = graph.to_index(v);
            row[j] = row[j].saturating_add(1);
        }
    }
    matrix
}

/// Computes a doubly lexical ordering of the adjacency matrix of a graph.
///
/// See [doubly_lexical_ordering].
#[instrument(skip_all)]
pub fn doubly_lexical_ordering_of_graph<G>(graph: G, invert: bool) -> DoublyLexicalOrdering
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let matrix = adjacency_matrix(graph);
    doubly_lexical_ordering(&matrix, invert)
}

/// Returns whether the rows and the columns of a square matrix are sorted
/// lexicographically, non-increasing or with `invert` non-decreasing.
///
/// Non-zero entries count as one. A matrix which is not square is never
/// sorted.
pub fn is_doubly_lexical<R: AsRef<[u8]>>(matrix: &[R], invert: bool) -> bool {
    let n = matrix.len();
    if matrix.iter().any(|row| row.as_ref().len() != n) {
        return false;
    }
    let row = |i: usize| matrix[i].as_ref().iter().map(|&x| x != 0);
    let col = |j: usize| matrix.iter().map(move |r| r.as_ref()[j] != 0);
    let in_order = |a: std::cmp::Ordering| if invert { a.is_le() } else { a.is_ge() };

    (1..n).all(|i| in_order(row(i - 1).cmp(row(i)))) && (1..n).all(|j| in_order(col(j - 1).cmp(col(j))))
}
