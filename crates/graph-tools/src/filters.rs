//! Selecting encoded graphs by a property.

use std::path::Path;

use tracing::{info, instrument, trace};

use crate::io::{read_lines, Decoded, Format, FormatError};

/// Decode every line and keep the graphs which satisfy `predicate`.
///
/// Stops at the first line which cannot be decoded.
#[instrument(skip_all, fields(format = ?format))]
pub fn filter<I, S, F>(format: Format, lines: I, predicate: F) -> Result<Vec<Decoded>, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&Decoded) -> bool,
{
    let mut total = 0;
    let mut kept = vec![];
    for (i, line) in lines.into_iter().enumerate() {
        let decoded = Decoded::decode(format, line.as_ref())?;
        total += 1;
        if predicate(&decoded) {
            trace!(line = i, "keep");
            kept.push(decoded);
        }
    }
    info!(total, kept = kept.len());
    Ok(kept)
}

/// Read the non-empty lines of a file and keep the graphs which satisfy
/// `predicate`.
pub fn filter_file<P, F>(format: Format, path: P, predicate: F) -> Result<Vec<Decoded>, FormatError>
where
    P: AsRef<Path>,
    F: Fn(&Decoded) -> bool,
{
    filter(format, read_lines(path)?, predicate)
}
