use std::collections::HashMap;
use std::rc::Rc;

use crate::block::Block;
use crate::index_set::IndexSet;

/// A cache from `(rows, cols)` pairs to their [Block].
///
/// Keys are compared by set equality of both parts. Blocks are bucketed by the
/// sum of all members of both parts. Different keys may share a bucket, a
/// lookup scans the bucket and compares the full keys.
///
/// Entries are never removed. Blocks of parts that were split later are simply
/// not looked up anymore.
#[derive(Debug, Default)]
pub struct BlockTable {
    buckets: HashMap<u64, Vec<Block>>,
    len: usize,
}

fn bucket(rows: &IndexSet, cols: &IndexSet) -> u64 {
    rows.sum().wrapping_add(cols.sum())
}

fn matches(block: &Block, rows: &IndexSet, cols: &IndexSet) -> bool {
    let same = |a: &Rc<IndexSet>, b: &IndexSet| std::ptr::eq(Rc::as_ptr(a), b) || **a == *b;
    same(block.rows(), rows) && same(block.cols(), cols)
}

impl BlockTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block under the key `(block.rows(), block.cols())`.
    ///
    /// If an equal key is already present the table is left unchanged and
    /// `false` is returned.
    pub fn add(&mut self, block: Block) -> bool {
        let entries = self.buckets.entry(bucket(block.rows(), block.cols())).or_default();
        if entries.iter().any(|e| matches(e, block.rows(), block.cols())) {
            return false;
        }
        entries.push(block);
        self.len += 1;
        true
    }

    /// Returns the block stored for `(rows, cols)`.
    pub fn get(&self, rows: &IndexSet, cols: &IndexSet) -> Option<&Block> {
        self.buckets.get(&bucket(rows, cols))?.iter().find(|e| matches(e, rows, cols))
    }

    /// Returns whether a block is stored for `(rows, cols)`.
    pub fn contains(&self, rows: &IndexSet, cols: &IndexSet) -> bool {
        self.get(rows, cols).is_some()
    }

    /// Returns the number of stored blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return an iterator over all stored blocks in unspecified order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.buckets.values().flatten()
    }
}
