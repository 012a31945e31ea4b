use std::collections::HashMap;
use std::rc::Rc;

use crate::index_set::IndexSet;

/// Number of non-zero entries of each row restricted to the columns of a block.
pub type RowBlockSizes = HashMap<usize, usize>;

/// The sub-matrix induced by a row part and a column part.
///
/// A block caches its *size*, the number of non-zero entries in the
/// sub-matrix, and for every row `r` of the row part the size of the row block
/// `({r}, cols)`. The block never looks at the matrix itself, all sizes are
/// supplied by the caller.
///
/// The row block sizes are shared between blocks. When a row part is split,
/// the bigger half keeps using the map of its parent as no row moved out of
/// it. A map may therefore contain entries for rows outside of
/// [Block::rows]. Only rows of the block must be queried.
#[derive(Clone, Debug)]
pub struct Block {
    rows: Rc<IndexSet>,
    cols: Rc<IndexSet>,
    size: usize,
    row_block_sizes: Rc<RowBlockSizes>,
}

impl Block {
    /// Create a block of size zero without row block sizes.
    pub fn new(rows: Rc<IndexSet>, cols: Rc<IndexSet>) -> Self {
        Self { rows, cols, size: 0, row_block_sizes: Rc::default() }
    }

    /// The row part.
    #[inline]
    pub fn rows(&self) -> &Rc<IndexSet> {
        &self.rows
    }

    /// The column part.
    #[inline]
    pub fn cols(&self) -> &Rc<IndexSet> {
        &self.cols
    }

    /// The number of non-zero entries of the sub-matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Record the number of non-zero entries of the sub-matrix.
    #[inline]
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Returns the size of the row block `({row}, cols)`, zero if none was
    /// recorded.
    #[inline]
    pub fn row_block_size(&self, row: usize) -> usize {
        self.row_block_sizes.get(&row).copied().unwrap_or(0)
    }

    /// Record the size of a single row block. A map shared with another block
    /// is copied first.
    pub fn set_row_block_size(&mut self, row: usize, size: usize) {
        Rc::make_mut(&mut self.row_block_sizes).insert(row, size);
    }

    /// Replace the row block sizes, possibly by a map shared with another block.
    pub fn set_row_block_sizes(&mut self, sizes: Rc<RowBlockSizes>) {
        self.row_block_sizes = sizes;
    }

    /// The row block sizes.
    pub fn row_block_sizes(&self) -> &Rc<RowBlockSizes> {
        &self.row_block_sizes
    }

    /// Returns the number of entries of the sub-matrix.
    #[inline]
    pub fn area(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// A block is constant if its sub-matrix is all zero or all one.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.size == 0 || self.size == self.area()
    }

    /// Returns whether the size equals the sum of the row block sizes of the
    /// block's rows.
    pub fn is_consistent(&self) -> bool {
        self.size == self.rows.iter().map(|r| self.row_block_size(r)).sum::<usize>()
    }
}
