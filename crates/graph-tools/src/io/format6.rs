//! Building blocks shared by the formats of the graph6 family.
//!
//! Every byte of an encoding is in the printable range `63..=126` and carries
//! six bits. See <https://users.cecs.anu.edu.au/~bdm/data/formats.txt>.

use crate::io::FormatError;

const BIAS: u8 = 63;
const MAX_SMALL_ORDER: usize = 62;
const MAX_MEDIUM_ORDER: usize = 258047;
const MAX_ORDER: usize = 68719476735;

/// Append `N(n)`, the encoding of the number of vertices.
///
/// # Panics
///
/// Panics if `n` exceeds `2^36 - 1`.
pub(crate) fn encode_order(n: usize, out: &mut String) {
    assert!(n <= MAX_ORDER, "order {n} cannot be encoded");
    let groups = if n <= MAX_SMALL_ORDER {
        1
    } else if n <= MAX_MEDIUM_ORDER {
        out.push('~');
        3
    } else {
        out.push_str("~~");
        6
    };
    for g in (0..groups).rev() {
        out.push(char::from(((n >> (6 * g)) & 0x3f) as u8 + BIAS));
    }
}

/// Append `R(x)`. The bits are grouped by six and the last group is padded
/// with zeros on the right.
pub(crate) fn encode_bits(bits: impl IntoIterator<Item = bool>, out: &mut String) {
    let mut value = 0_u8;
    let mut len = 0;
    for bit in bits {
        value = (value << 1) | bit as u8;
        len += 1;
        if len == 6 {
            out.push(char::from(value + BIAS));
            value = 0;
            len = 0;
        }
    }
    if len > 0 {
        out.push(char::from((value << (6 - len)) + BIAS));
    }
}

/// Check that every byte is printable and return the data values.
///
/// `offset` is the position of `bytes[0]` in the whole line, used for error
/// reporting.
pub(crate) fn values(bytes: &[u8], offset: usize) -> Result<Vec<u8>, FormatError> {
    bytes
        .iter()
        .enumerate()
        .map(|(i, &byte)| match byte {
            63..=126 => Ok(byte - BIAS),
            _ => Err(FormatError::InvalidByte { position: offset + i, byte }),
        })
        .collect()
}

/// Split `N(n)` off the front of the data values.
pub(crate) fn decode_order(values: &[u8]) -> Result<(usize, &[u8]), FormatError> {
    let (groups, skip) = match values {
        [] => return Err(FormatError::Empty),
        [63, 63, ..] => (6, 2),
        [63, ..] => (3, 1),
        _ => (1, 0),
    };
    let end = skip + groups;
    if values.len() < end {
        return Err(FormatError::Truncated { expected: end, actual: values.len() });
    }
    let n = values[skip..end].iter().fold(0, |n, &v| (n << 6) | v as usize);
    Ok((n, &values[end..]))
}

/// The number of data values needed for `bits` bits.
pub(crate) fn len_for_bits(bits: usize) -> usize {
    bits.div_ceil(6)
}

/// Iterate over the bits of the data values, most significant bit first.
pub(crate) fn bits(values: &[u8]) -> impl Iterator<Item = bool> + '_ {
    values.iter().flat_map(|&v| (0..6).rev().map(move |i| (v >> i) & 1 == 1))
}

#[cfg(test)]
mod test {
    use super::*;

    fn order(n: usize) -> Vec<u8> {
        let mut s = String::new();
        encode_order(n, &mut s);
        s.into_bytes()
    }

    fn pack(bits: &[u8]) -> Vec<u8> {
        let mut s = String::new();
        encode_bits(bits.iter().map(|&b| b == 1), &mut s);
        s.into_bytes()
    }

    #[test]
    fn encode_order_sizes() {
        assert_eq!(order(0), [63]);
        assert_eq!(order(8), [71]);
        assert_eq!(order(30), [93]);
        assert_eq!(order(62), [125]);
        assert_eq!(order(136), [126, 63, 65, 71]);
        assert_eq!(order(12345), [126, 66, 63, 120]);
        assert_eq!(order(258047), [126, 125, 126, 126]);
        assert_eq!(order(258048), [126, 126, 63, 63, 63, 126, 63, 63]);
        assert_eq!(order(460175067), [126, 126, 63, 90, 90, 90, 90, 90]);
    }

    #[test]
    fn decode_order_sizes() {
        for n in [0, 1, 8, 62, 63, 136, 12345, 258047, 258048, 460175067] {
            let encoded = order(n);
            let mut data = values(&encoded, 0).unwrap();
            data.push(5);
            let (m, rest) = decode_order(&data).unwrap();
            assert_eq!((m, rest), (n, &[5][..]));
        }
    }

    #[test]
    fn decode_order_errors() {
        assert!(matches!(decode_order(&[]), Err(FormatError::Empty)));
        assert!(matches!(decode_order(&[63, 2]), Err(FormatError::Truncated { expected: 4, actual: 2 })));
        assert!(matches!(decode_order(&[63, 63, 0, 0]), Err(FormatError::Truncated { expected: 8, actual: 4 })));
    }

    #[test]
    fn encode_bits_with_padding() {
        let a = [1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1];
        assert_eq!(pack(&a), [114, 95, 105, 79, 107]);
        assert_eq!(pack(&[1, 1, 1, 1, 1, 1]), [126]);
        assert_eq!(pack(&[1, 1, 0, 0, 1, 1]), [114]);
        let d = [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0];
        assert_eq!(pack(&d), [73, 63, 65, 79, 63]);
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn bits_of_values() {
        let data = values(&[114, 95], 0).unwrap();
        let expected = [1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0];
        assert_eq!(bits(&data).map(u8::from).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn invalid_bytes() {
        assert_eq!(values(b"C~", 0).unwrap(), [4, 63]);
        assert!(matches!(values(b"C\x7f", 3), Err(FormatError::InvalidByte { position: 4, byte: 127 })));
        assert!(matches!(values(b" ", 0), Err(FormatError::InvalidByte { position: 0, byte: b' ' })));
    }
}
