use doubly_lexical_ordering::AdjacencyMatrix;

use crate::graph::{Graph, StaticDigraph};
use crate::io::{decode_dense, format6, strip_prefix, FormatError};

const PREFIX: char = '&';

/// Encode a digraph in `digraph6`. The matrix is written row by row, parallel
/// arcs are written once.
pub fn to_digraph6(digraph: &StaticDigraph) -> String {
    let mut out = String::from(PREFIX);
    format6::encode_order(digraph.order(), &mut out);
    format6::encode_bits(digraph.matrix().iter().flatten().map(|&x| x != 0), &mut out);
    out
}

/// Decode a `digraph6` line.
pub fn from_digraph6(line: &str) -> Result<StaticDigraph, FormatError> {
    let bytes = strip_prefix(line, PREFIX)?;
    let (n, data) = decode_dense(bytes, 1, |n| n.checked_mul(n))?;
    let mut matrix: AdjacencyMatrix = vec![vec![0; n]; n];
    let positions = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)));
    for ((i, j), bit) in positions.zip(format6::bits(&data)) {
        matrix[i][j] = bit as u8;
    }
    Ok(StaticDigraph::from_matrix_unchecked(matrix))
}

#[cfg(test)]
mod test {
    use super::*;

    fn digraph_5() -> StaticDigraph {
        StaticDigraph::from_matrix(vec![
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    fn digraph_8() -> StaticDigraph {
        StaticDigraph::from_matrix(vec![
            vec![0, 1, 1, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 0, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 1, 0, 0, 1],
            vec![0, 1, 0, 0, 1, 0, 0, 1],
            vec![0, 0, 0, 1, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn encode() {
        assert_eq!(to_digraph6(&digraph_5()), "&DI?AO?");
        assert_eq!(to_digraph6(&digraph_8()), "&GW???WG?hQP?");
    }

    #[test]
    fn decode() {
        assert_eq!(from_digraph6("&DI?AO?").unwrap(), digraph_5());
        assert_eq!(from_digraph6("&GW???WG?hQP?").unwrap(), digraph_8());
        assert_eq!(from_digraph6("&?").unwrap(), StaticDigraph::default());
    }

    #[test]
    fn loops_are_kept() {
        let digraph = StaticDigraph::from_matrix(vec![vec![1, 0], vec![1, 1]]).unwrap();
        assert_eq!(from_digraph6(&to_digraph6(&digraph)).unwrap(), digraph);
    }

    #[test]
    fn invalid() {
        assert!(matches!(from_digraph6("DI?AO?"), Err(FormatError::MissingPrefix { expected: '&' })));
        assert!(matches!(from_digraph6("&DI?AO"), Err(FormatError::Truncated { expected: 6, actual: 5 })));
        assert!(matches!(from_digraph6("&"), Err(FormatError::Empty)));
        assert!(matches!(from_digraph6("&~~~~~~~~"), Err(FormatError::Truncated { expected: usize::MAX, actual: 8 })));
    }
}
