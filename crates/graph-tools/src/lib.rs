//! Graph utilities around [doubly_lexical_ordering].
//!
//! Graphs and digraphs are stored as adjacency matrices ([StaticGraph],
//! [StaticDigraph]) and read from and written to the text formats of the
//! graph6 family ([io]). The crate also contains generators and recognizers
//! for small graph families, an iterator over fixed-weight bit-vectors and a
//! circular SVG layout.
//!
//! # Examples
//!
//! ```rust
//! use graph_tools::io::{Decoded, Format};
//! use graph_tools::{filter, is_cycle};
//!
//! let lines = ["C~", "Cr", "Bw"];
//! let cycles = filter(Format::Graph6, lines, |decoded| match decoded {
//!     Decoded::Graph(graph) => is_cycle(graph),
//!     Decoded::Digraph(_) => false,
//! })
//! .unwrap();
//!
//! assert_eq!(cycles.len(), 2);
//! assert_eq!(cycles[0].matrix().len(), 4);
//! ```
//!
//! The matrix of a decoded graph can be ordered directly.
//! ```rust
//! use doubly_lexical_ordering::{doubly_lexical_ordering, is_doubly_lexical};
//! use graph_tools::io::from_graph6;
//! use graph_tools::Graph;
//!
//! let cube = from_graph6("Gr_iOk").unwrap();
//! let ordering = doubly_lexical_ordering(cube.matrix(), false);
//!
//! assert!(is_doubly_lexical(ordering.matrix(), false));
//! ```
//!
//! # References
//! + Brendan McKay. “Description of graph6, sparse6 and digraph6 encodings”. <https://users.cecs.anu.edu.au/~bdm/data/formats.txt>.
//! + Frank Ruskey and Aaron Williams. “The coolest way to generate combinations”. <https://doi.org/10.1016/j.disc.2007.11.048>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

pub mod drawing;
mod filters;
mod generators;
mod graph;
pub mod io;
pub mod sequence;


pub use filters::{filter, filter_file};
pub use generators::{
    circulant_digraph, complete_bipartite_graph, complete_graph, cycle_graph, is_clique, is_complete,
    is_complete_bipartite, is_cycle, is_path, is_stable, path_graph,
};
pub use graph::{AdjacencyList, Graph, GraphError, StaticDigraph, StaticGraph};
