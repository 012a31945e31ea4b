//! Refinement primitives on a square matrix.
//!
//! An entry counts as *one* if it is non-zero.

use crate::block::{Block, RowBlockSizes};
use crate::index_set::IndexSet;

#[inline(always)]
pub(crate) fn is_one<R: AsRef<[u8]>>(matrix: &[R], row: usize, col: usize) -> bool {
    matrix[row].as_ref()[col] != 0
}

/// Split `cols` by the entries of `row`.
///
/// Returns `(ones, zeros)`, or `(zeros, ones)` if `invert` is set. Either half
/// may be empty.
pub fn column_refinement<R: AsRef<[u8]>>(
    matrix: &[R],
    row: usize,
    cols: &IndexSet,
    invert: bool,
) -> (IndexSet, IndexSet) {
    let (ones, zeros) = cols.partition(|col| is_one(matrix, row, col));
    if invert {
        (zeros, ones)
    } else {
        (ones, zeros)
    }
}

/// Split `rows` by the entries of `col`.
///
/// Returns `(ones, zeros)`, or `(zeros, ones)` if `invert` is set. Either half
/// may be empty.
pub fn row_refinement<R: AsRef<[u8]>>(matrix: &[R], col: usize, rows: &IndexSet, invert: bool) -> (IndexSet, IndexSet) {
    let (ones, zeros) = rows.partition(|row| is_one(matrix, row, col));
    if invert {
        (zeros, ones)
    } else {
        (ones, zeros)
    }
}

/// Returns the smallest row of the block which is not constant on the columns
/// of the block.
///
/// Only the cached row block sizes are read. If `None` is returned and the
/// block is not constant, its rows are each constant on the columns but
/// disagree with each other.
pub fn splitting_row(block: &Block) -> Option<usize> {
    let width = block.cols().len();
    block.rows().iter().find(|&row| {
        let size = block.row_block_size(row);
        0 < size && size < width
    })
}

/// Count the non-zero entries of the sub-matrix `rows x cols`, in total and
/// for every row.
///
/// This is the only function that scans a sub-matrix entry by entry.
pub fn block_size<R: AsRef<[u8]>>(matrix: &[R], rows: &IndexSet, cols: &IndexSet) -> (usize, RowBlockSizes) {
    let mut total = 0;
    let mut sizes = RowBlockSizes::with_capacity(rows.len());
    for row in rows.iter() {
        let size = cols.iter().filter(|&col| is_one(matrix, row, col)).count();
        sizes.insert(row, size);
        total += size;
    }
    (total, sizes)
}
