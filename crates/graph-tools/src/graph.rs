//! Static graphs and digraphs stored as adjacency matrices.

use doubly_lexical_ordering::{adjacency_matrix, AdjacencyMatrix, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};
use thiserror::Error;

/// `list[v]` contains the neighbours of `v`.
pub type AdjacencyList = Vec<Vec<usize>>;

/// Errors when constructing a graph from a matrix or a list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("adjacency matrix is not symmetric (entries ({row}, {col}) and ({col}, {row}) differ)")]
    AsymmetricMatrix { row: usize, col: usize },
    #[error("adjacency matrix is not square (row {row} has {len} entries, expected {expected})")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("invalid adjacency list ({neighbour} is listed as a neighbour of {vertex})")]
    InvalidList { vertex: usize, neighbour: usize },
}

/// Common queries of [StaticGraph] and [StaticDigraph].
pub trait Graph {
    /// The number of vertices.
    fn order(&self) -> usize;

    /// The number of edges (or arcs).
    fn size(&self) -> usize;

    /// The degree of every vertex, indexed by vertex.
    fn degree_sequence(&self) -> Vec<usize>;

    /// The adjacency matrix.
    fn matrix(&self) -> &AdjacencyMatrix;

    /// The adjacency list derived from the matrix. Neighbours are sorted.
    fn list(&self) -> AdjacencyList {
        self.matrix()
            .iter()
            .map(|row| row.iter().enumerate().filter(|(_, &x)| x != 0).map(|(j, _)| j).collect())
            .collect()
    }
}

fn check_square(matrix: &AdjacencyMatrix) -> Result<(), GraphError> {
    let n = matrix.len();
    match matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
        Some((row, r)) => Err(GraphError::NotSquare { row, len: r.len(), expected: n }),
        None => Ok(()),
    }
}

fn check_list(list: &AdjacencyList) -> Result<(), GraphError> {
    let n = list.len();
    for (vertex, neighbours) in list.iter().enumerate() {
        if let Some(&neighbour) = neighbours.iter().find(|&&w| w >= n) {
            return Err(GraphError::InvalidList { vertex, neighbour });
        }
    }
    Ok(())
}

fn list_to_matrix(list: &AdjacencyList) -> AdjacencyMatrix {
    let n = list.len();
    let mut matrix = vec![vec![0; n]; n];
    for (v, neighbours) in list.iter().enumerate() {
        for &w in neighbours {
            matrix[v][w] = 1;
        }
    }
    matrix
}

/// An undirected graph which cannot be modified.
///
/// Entries of the adjacency matrix count parallel edges. A non-zero diagonal
/// entry is a loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticGraph {
    matrix: AdjacencyMatrix,
}

impl StaticGraph {
    /// Create a graph from a square and symmetric adjacency matrix.
    pub fn from_matrix(matrix: AdjacencyMatrix) -> Result<Self, GraphError> {
        check_square(&matrix)?;
        for (i, row) in matrix.iter().enumerate() {
            for (j, &x) in row.iter().enumerate().skip(i + 1) {
                if x != matrix[j][i] {
                    return Err(GraphError::AsymmetricMatrix { row: i, col: j });
                }
            }
        }
        Ok(Self { matrix })
    }

    /// Create a graph without checking that the matrix is square and
    /// symmetric.
    pub fn from_matrix_unchecked(matrix: AdjacencyMatrix) -> Self {
        Self { matrix }
    }

    /// Create a graph from an adjacency list in which `w` is a neighbour of `v`
    /// exactly if `v` is a neighbour of `w`.
    pub fn from_list(list: &AdjacencyList) -> Result<Self, GraphError> {
        check_list(list)?;
        let matrix = list_to_matrix(list);
        for (vertex, neighbours) in list.iter().enumerate() {
            if let Some(&neighbour) = neighbours.iter().find(|&&w| matrix[w][vertex] == 0) {
                return Err(GraphError::InvalidList { vertex, neighbour });
            }
        }
        Ok(Self { matrix })
    }

    /// Create a graph from an adjacency list. Adjacencies are not mirrored.
    ///
    /// # Panics
    ///
    /// Panics if a neighbour is not a vertex.
    pub fn from_list_unchecked(list: &AdjacencyList) -> Self {
        Self { matrix: list_to_matrix(list) }
    }

    /// Create a graph from an undirected `petgraph` graph.
    pub fn from_petgraph<G>(graph: G) -> Result<Self, GraphError>
    where
        G: NodeCompactIndexable + IntoNeighbors,
    {
        Self::from_matrix(adjacency_matrix(graph))
    }

    /// The neighbours of `v`, including `v` itself if it has a loop.
    pub fn neighbours(&self, v: usize) -> IndexSet {
        self.matrix[v].iter().enumerate().filter(|(_, &x)| x != 0).map(|(w, _)| w).collect()
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.matrix[u][v] != 0
    }

    /// Convert to a `petgraph` graph with node `i` for vertex `i`. Parallel
    /// edges and loops are kept.
    pub fn to_ungraph(&self) -> UnGraph<(), ()> {
        let n = self.order();
        let mut graph = UnGraph::with_capacity(n, self.size());
        for _ in 0..n {
            graph.add_node(());
        }
        for (j, row) in self.matrix.iter().enumerate() {
            for (i, &count) in row.iter().enumerate().take(j + 1) {
                for _ in 0..count {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        graph
    }

    /// Consumes the graph and returns its adjacency matrix.
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }
}

impl Graph for StaticGraph {
    fn order(&self) -> usize {
        self.matrix.len()
    }

    /// Each edge is counted once, a loop as one edge.
    fn size(&self) -> usize {
        self.matrix.iter().enumerate().map(|(i, row)| row[..=i].iter().filter(|&&x| x != 0).count()).sum()
    }

    fn degree_sequence(&self) -> Vec<usize> {
        self.matrix.iter().map(|row| row.iter().filter(|&&x| x != 0).count()).collect()
    }

    fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

/// A directed graph which cannot be modified.
///
/// Entry `[u][v]` is non-zero if there is an arc from `u` to `v`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticDigraph {
    matrix: AdjacencyMatrix,
}

impl StaticDigraph {
    /// Create a digraph from a square adjacency matrix.
    pub fn from_matrix(matrix: AdjacencyMatrix) -> Result<Self, GraphError> {
        check_square(&matrix)?;
        Ok(Self { matrix })
    }

    /// Create a digraph without checking that the matrix is square.
    pub fn from_matrix_unchecked(matrix: AdjacencyMatrix) -> Self {
        Self { matrix }
    }

    /// Create a digraph from lists of out-neighbours.
    pub fn from_list(list: &AdjacencyList) -> Result<Self, GraphError> {
        check_list(list)?;
        Ok(Self { matrix: list_to_matrix(list) })
    }

    /// Create a digraph from any directed `petgraph` graph.
    pub fn from_petgraph<G>(graph: G) -> Self
    where
        G: NodeCompactIndexable + IntoNeighbors,
    {
        Self { matrix: adjacency_matrix(graph) }
    }

    /// The number of arcs entering each vertex.
    pub fn indegree_sequence(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.order()];
        for row in &self.matrix {
            for (j, &x) in row.iter().enumerate() {
                if x != 0 {
                    degrees[j] += 1;
                }
            }
        }
        degrees
    }

    /// The number of arcs leaving each vertex.
    pub fn outdegree_sequence(&self) -> Vec<usize> {
        self.matrix.iter().map(|row| row.iter().filter(|&&x| x != 0).count()).collect()
    }

    /// Convert to a `petgraph` digraph with node `i` for vertex `i`.
    pub fn to_digraph(&self) -> DiGraph<(), ()> {
        let n = self.order();
        let mut graph = DiGraph::with_capacity(n, self.size());
        for _ in 0..n {
            graph.add_node(());
        }
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &count) in row.iter().enumerate() {
                for _ in 0..count {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        graph
    }

    /// Consumes the digraph and returns its adjacency matrix.
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }
}

impl Graph for StaticDigraph {
    fn order(&self) -> usize {
        self.matrix.len()
    }

    fn size(&self) -> usize {
        self.matrix.iter().flatten().filter(|&&x| x != 0).count()
    }

    /// The sum of the in-degree and the out-degree.
    fn degree_sequence(&self) -> Vec<usize> {
        self.indegree_sequence().into_iter().zip(self.outdegree_sequence()).map(|(a, b)| a + b).collect()
    }

    fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}
