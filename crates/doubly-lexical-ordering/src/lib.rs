//! This is a library to compute a [doubly lexical ordering](https://doi.org/10.1137/0216057) of a square 0/1 matrix.
//!
//! The rows and the columns of the matrix are permuted simultaneously such
//! that every row and every column, read as a bit-vector, is in lexicographic
//! order. Doubly lexical orderings are a building block for the recognition of
//! chordal and strongly chordal graphs and for totally balanced matrices.
//!
//! # Examples
//!
//! ```rust
//! use doubly_lexical_ordering::{doubly_lexical_ordering, is_doubly_lexical};
//!
//! let matrix = vec![
//!     vec![0_u8, 1, 0, 1],
//!     vec![0, 1, 0, 0],
//!     vec![0, 0, 1, 0],
//!     vec![0, 0, 0, 1],
//! ];
//! let ordering = doubly_lexical_ordering(&matrix, false);
//!
//! assert!(is_doubly_lexical(ordering.matrix(), false));
//! assert_eq!(ordering.matrix()[0], [1, 1, 0, 0]);
//! // the output row `i` is the input row `rows()[i]`
//! assert_eq!(ordering.rows()[0], 0);
//! ```
//!
//! Graphs are supported through their adjacency matrix.
//! ```rust
//! use petgraph::graph::UnGraph;
//! use doubly_lexical_ordering::{doubly_lexical_ordering_of_graph, is_doubly_lexical};
//!
//! // a path graph with 4 nodes
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let ordering = doubly_lexical_ordering_of_graph(&graph, false);
//!
//! assert!(is_doubly_lexical(ordering.matrix(), false));
//! ```
//!
//! # Algorithm
//!
//! An ordered row partition and an ordered column partition are refined until
//! every [Block] is constant. The sizes of the blocks are cached in a
//! [BlockTable] and derived from the parent block after each split, counting
//! only the smaller half of a split column part.
//!
//! # References
//! + \[Lub87\]: Anna Lubiw. “Doubly Lexical Orderings of Matrices”. <https://doi.org/10.1137/0216057>.
//! + \[PT87\]: Robert Paige and Robert E. Tarjan. “Three Partition Refinement Algorithms”. <https://doi.org/10.1137/0216062>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

mod block;
mod block_table;
mod index_set;
mod matrix;
mod ordering;
/// Refinement primitives used by [doubly_lexical_ordering].
pub mod refinement;


pub use block::{Block, RowBlockSizes};
pub use block_table::BlockTable;
pub use index_set::IndexSet;
pub use matrix::{adjacency_matrix, doubly_lexical_ordering_of_graph, is_doubly_lexical, AdjacencyMatrix};
pub use ordering::{doubly_lexical_ordering, DoublyLexicalOrdering};
