//! Text formats of the graph6 family.
//!
//! | format     | prefix | contents                                           |
//! |------------|--------|----------------------------------------------------|
//! | `graph6`   |        | upper triangle of a simple graph                   |
//! | `loop6`    | `;`    | upper triangle including the diagonal              |
//! | `digraph6` | `&`    | full matrix of a digraph                           |
//! | `sparse6`  | `:`    | edge list, supports loops and parallel edges       |

mod digraph6;
mod format6;
mod graph6;
mod loop6;
mod sparse6;

use std::fs::File;
use std::io::BufRead;
use std::path::Path;

use clap::ValueEnum;
use doubly_lexical_ordering::AdjacencyMatrix;
use thiserror::Error;

use crate::graph::{Graph, GraphError, StaticDigraph, StaticGraph};

pub use digraph6::{from_digraph6, to_digraph6};
pub use graph6::{from_graph6, to_graph6};
pub use loop6::{from_loop6, to_loop6};
pub use sparse6::{from_sparse6, to_sparse6};

/// The largest order accepted by [from_sparse6].
///
/// A sparse6 header may announce far more vertices than its edge list
/// touches, while the decoded graph is stored as a dense `n x n` matrix. The
/// dense formats need at least `n^2 / 12` bytes of input and are bounded by
/// the length of the line instead.
pub const MAX_SPARSE_ORDER: usize = 1 << 14;

/// Errors when reading or decoding an encoded graph.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("empty input")]
    Empty,
    #[error("missing prefix (expected {expected:?})")]
    MissingPrefix { expected: char },
    #[error("invalid byte {byte} at position {position}")]
    InvalidByte { position: usize, byte: u8 },
    #[error("input is truncated (expected {expected} bytes, got {actual})")]
    Truncated { expected: usize, actual: usize },
    #[error("input has trailing bytes (expected {expected} bytes, got {actual})")]
    TrailingBytes { expected: usize, actual: usize },
    #[error("order {order} exceeds the largest decodable order {}", MAX_SPARSE_ORDER)]
    TooLarge { order: usize },
    #[error("invalid graph")]
    Graph(#[from] GraphError),
    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// A format of the graph6 family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Graph6,
    Loop6,
    Digraph6,
    Sparse6,
}

impl Format {
    /// Guess the format of an encoded line from its prefix.
    pub fn detect(line: &str) -> Format {
        match line.as_bytes().first() {
            Some(b';') => Format::Loop6,
            Some(b'&') => Format::Digraph6,
            Some(b':') => Format::Sparse6,
            _ => Format::Graph6,
        }
    }

    /// Returns whether the format encodes directed graphs.
    pub fn is_directed(self) -> bool {
        self == Format::Digraph6
    }
}

/// A graph or a digraph read from a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    Graph(StaticGraph),
    Digraph(StaticDigraph),
}

impl Decoded {
    /// Decode a line of the given format.
    pub fn decode(format: Format, line: &str) -> Result<Self, FormatError> {
        Ok(match format {
            Format::Graph6 => Decoded::Graph(from_graph6(line)?),
            Format::Loop6 => Decoded::Graph(from_loop6(line)?),
            Format::Sparse6 => Decoded::Graph(from_sparse6(line)?),
            Format::Digraph6 => Decoded::Digraph(from_digraph6(line)?),
        })
    }

    /// Encode in the given format.
    ///
    /// A graph written as `digraph6` has both arcs of every edge. A digraph
    /// written in one of the undirected formats must have a symmetric matrix.
    pub fn encode(&self, format: Format) -> Result<String, FormatError> {
        Ok(match format {
            Format::Graph6 => to_graph6(&self.to_graph()?),
            Format::Loop6 => to_loop6(&self.to_graph()?),
            Format::Sparse6 => to_sparse6(&self.to_graph()?),
            Format::Digraph6 => to_digraph6(&self.to_digraph()),
        })
    }

    fn to_graph(&self) -> Result<StaticGraph, GraphError> {
        match self {
            Decoded::Graph(graph) => Ok(graph.clone()),
            Decoded::Digraph(digraph) => StaticGraph::from_matrix(digraph.matrix().clone()),
        }
    }

    fn to_digraph(&self) -> StaticDigraph {
        match self {
            Decoded::Graph(graph) => StaticDigraph::from_matrix_unchecked(graph.matrix().clone()),
            Decoded::Digraph(digraph) => digraph.clone(),
        }
    }

    /// The adjacency matrix of the graph or the digraph.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        match self {
            Decoded::Graph(graph) => graph.matrix(),
            Decoded::Digraph(digraph) => digraph.matrix(),
        }
    }
}

/// Read the non-empty lines of a file, without line terminators.
pub fn read_lines<P>(path: P) -> Result<Vec<String>, FormatError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut lines = vec![];
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Strip the prefix of a format and return the remaining bytes.
fn strip_prefix(line: &str, prefix: char) -> Result<&[u8], FormatError> {
    if line.is_empty() {
        return Err(FormatError::Empty);
    }
    line.strip_prefix(prefix).map(str::as_bytes).ok_or(FormatError::MissingPrefix { expected: prefix })
}

/// Decode `N(n)` and check that exactly as many data values follow as are
/// needed for `bits(n)` bits.
fn decode_dense(
    bytes: &[u8],
    offset: usize,
    bits: impl Fn(usize) -> Option<usize>,
) -> Result<(usize, Vec<u8>), FormatError> {
    let values = format6::values(bytes, offset)?;
    let (n, data) = format6::decode_order(&values)?;
    let header = values.len() - data.len();
    let expected = bits(n).map_or(usize::MAX, |bits| header + format6::len_for_bits(bits));
    if values.len() < expected {
        return Err(FormatError::Truncated { expected, actual: values.len() });
    }
    if values.len() > expected {
        return Err(FormatError::TrailingBytes { expected, actual: values.len() });
    }
    Ok((n, data.to_vec()))
}
