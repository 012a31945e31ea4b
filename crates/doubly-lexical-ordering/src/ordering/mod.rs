mod partition;

use std::rc::Rc;

use tracing::{debug, info, instrument, trace};

use crate::block::{Block, RowBlockSizes};
use crate::block_table::BlockTable;
use crate::index_set::IndexSet;
use crate::matrix::AdjacencyMatrix;
use crate::ordering::partition::OrderedPartition;
use crate::refinement::{block_size, column_refinement, row_refinement, splitting_row};

/// The result of [doubly_lexical_ordering].
///
/// `matrix()[i][j] == input[rows()[i]][cols()[j]]` for all `i` and `j`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoublyLexicalOrdering {
    matrix: AdjacencyMatrix,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl DoublyLexicalOrdering {
    /// The input matrix with its rows and columns permuted.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// `rows()[i]` is the input index of the row placed at position `i`.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// `cols()[j]` is the input index of the column placed at position `j`.
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Returns the permuted matrix, the row order and the column order.
    pub fn into_parts(self) -> (AdjacencyMatrix, Vec<usize>, Vec<usize>) {
        (self.matrix, self.rows, self.cols)
    }
}

/// Computes a doubly lexical ordering of a square matrix.
///
/// The rows and the columns are permuted such that the rows, read as
/// bit-vectors from left to right, and the columns, read from top to bottom,
/// are both sorted lexicographically. Without `invert` ones come before
/// zeros, i.e. the vectors are non-increasing. With `invert` they are
/// non-decreasing. Every non-zero entry counts as a one.
///
/// Rows (and columns) with equal vectors keep their relative input order.
/// When several rows could be used to refine a column part, the smallest one
/// is taken. The result is therefore deterministic.
///
/// The algorithm refines an ordered row partition and an ordered column
/// partition until every block `(row part, column part)` is all zero or all
/// one. Block sizes are maintained incrementally: after a column part is
/// split, only the smaller half is counted, after a row part is split, no
/// entry is counted at all.
///
/// # Panics
///
/// Panics if the matrix is not square.
#[instrument(skip_all, fields(n = matrix.len(), invert = invert))]
pub fn doubly_lexical_ordering<R: AsRef<[u8]>>(matrix: &[R], invert: bool) -> DoublyLexicalOrdering {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        let len = row.as_ref().len();
        assert_eq!(len, n, "row {i} has {len} entries, expected {n} for a square matrix");
    }

    let mut state = State::new(matrix, invert);
    state.refine();

    info!(
        number_of_row_parts = state.rows.len(),
        number_of_col_parts = state.cols.len(),
        number_of_blocks = state.table.len()
    );

    state.into_ordering()
}

struct State<'m, R> {
    matrix: &'m [R],
    invert: bool,

    rows: OrderedPartition,
    cols: OrderedPartition,

    /// Column parts which are not yet known to be constant on every row part.
    /// The top is the leftmost of them, all parts to its left are done.
    pending: Vec<Rc<IndexSet>>,
    /// Position of the top of `pending` in `cols`.
    top_pos: usize,

    table: BlockTable,
}

impl<'m, R: AsRef<[u8]>> State<'m, R> {
    fn new(matrix: &'m [R], invert: bool) -> Self {
        let n = matrix.len();
        let rows = OrderedPartition::new(n);
        let cols = OrderedPartition::new(n);
        let mut pending = Vec::with_capacity(n);
        let mut table = BlockTable::new();

        if n > 0 {
            let all_rows = Rc::clone(&rows[0]);
            let all_cols = Rc::clone(&cols[0]);
            let (size, sizes) = block_size(matrix, &all_rows, &all_cols);
            let mut block = Block::new(all_rows, Rc::clone(&all_cols));
            block.set_size(size);
            block.set_row_block_sizes(Rc::new(sizes));
            table.add(block);
            pending.push(all_cols);
        }

        Self { matrix, invert, rows, cols, pending, top_pos: 0, table }
    }

    fn refine(&mut self) {
        let mut i = 0;
        while let Some(cols) = self.pending.last().map(Rc::clone) {
            if i == self.rows.len() {
                // Every row part is constant on the top column part.
                self.pending.pop();
                self.top_pos += 1;
                i = 0;
                continue;
            }

            let block = expect_block(&self.table, &self.rows[i], &cols);
            if block.is_constant() {
                i += 1;
                continue;
            }

            if let Some(row) = splitting_row(block) {
                self.split_top_column_part(i, row);
                i = 0;
            } else {
                let col = cols.first().expect("a non-constant block has columns");
                self.split_row_part(i, col);
                i += 2;
            }
        }
        debug_assert_eq!(self.top_pos, self.cols.len());
    }

    /// Split the top column part by the entries of `row`. The row parts before
    /// `cursor` are known to be constant on it.
    fn split_top_column_part(&mut self, cursor: usize, row: usize) {
        let parent = self.pending.pop().expect("there is a top column part");
        debug_assert!(Rc::ptr_eq(&self.cols[self.top_pos], &parent));

        let (first, second) = column_refinement(self.matrix, row, &parent, self.invert);
        let (first, second) = (Rc::new(first), Rc::new(second));
        trace!(row, first = ?first, second = ?second, "split column part");

        self.cols.split(self.top_pos, Rc::clone(&first), Rc::clone(&second));
        self.pending.push(Rc::clone(&second));
        self.pending.push(Rc::clone(&first));

        let (small, big) = if first.len() <= second.len() { (first, second) } else { (second, first) };
        let matrix = self.matrix;
        for (k, rows) in self.rows.iter().enumerate() {
            let block = expect_block(&self.table, rows, &parent);
            let (small_block, big_block) = if k < cursor {
                split_constant_block(block, &small, &big)
            } else {
                split_block_by_columns(matrix, block, &small, &big)
            };
            debug_assert_eq!(small_block.size() + big_block.size(), block.size());
            self.table.add(small_block);
            self.table.add(big_block);
        }
    }

    /// Split the row part at `pos` by the entries of `col`.
    fn split_row_part(&mut self, pos: usize, col: usize) {
        let parent = Rc::clone(&self.rows[pos]);
        let (first, second) = row_refinement(self.matrix, col, &parent, self.invert);
        let (first, second) = (Rc::new(first), Rc::new(second));
        debug!(col, first = first.len(), second = second.len(), "split row part");

        self.rows.split(pos, Rc::clone(&first), Rc::clone(&second));

        let (small, big) = if first.len() <= second.len() { (first, second) } else { (second, first) };
        for cols in &self.pending {
            let block = expect_block(&self.table, &parent, cols);
            let (small_block, big_block) = split_block_by_rows(block, &small, &big);
            debug_assert_eq!(small_block.size() + big_block.size(), block.size());
            self.table.add(small_block);
            self.table.add(big_block);
        }
    }

    fn into_ordering(self) -> DoublyLexicalOrdering {
        let rows = self.rows.permutation();
        let cols = self.cols.permutation();
        let matrix = rows.iter().map(|&r| cols.iter().map(|&c| self.matrix[r].as_ref()[c]).collect()).collect();
        DoublyLexicalOrdering { matrix, rows, cols }
    }
}

fn expect_block<'t>(table: &'t BlockTable, rows: &IndexSet, cols: &IndexSet) -> &'t Block {
    table.get(rows, cols).expect("every pair of a row part and a pending column part has a block")
}

/// The halves of a constant block split by columns are constant with the same
/// value.
fn split_constant_block(parent: &Block, small: &Rc<IndexSet>, big: &Rc<IndexSet>) -> (Block, Block) {
    debug_assert!(parent.is_constant());
    let rows = parent.rows();
    let half = |cols: &Rc<IndexSet>| {
        let mut block = Block::new(Rc::clone(rows), Rc::clone(cols));
        if parent.size() != 0 {
            block.set_size(rows.len() * cols.len());
            block.set_row_block_sizes(Rc::new(rows.iter().map(|r| (r, cols.len())).collect()));
        }
        block
    };
    (half(small), half(big))
}

/// Count the smaller half and derive the bigger one from the parent.
fn split_block_by_columns<R: AsRef<[u8]>>(
    matrix: &[R],
    parent: &Block,
    small: &Rc<IndexSet>,
    big: &Rc<IndexSet>,
) -> (Block, Block) {
    let rows = parent.rows();
    let (small_size, small_sizes) = block_size(matrix, rows, small);
    let big_sizes: RowBlockSizes =
        rows.iter().map(|r| (r, parent.row_block_size(r) - small_sizes.get(&r).copied().unwrap_or(0))).collect();

    let mut small_block = Block::new(Rc::clone(rows), Rc::clone(small));
    small_block.set_size(small_size);
    small_block.set_row_block_sizes(Rc::new(small_sizes));

    let mut big_block = Block::new(Rc::clone(rows), Rc::clone(big));
    big_block.set_size(parent.size() - small_size);
    big_block.set_row_block_sizes(Rc::new(big_sizes));

    (small_block, big_block)
}

/// Copy the row block sizes of the smaller half, the bigger half shares the
/// map of the parent.
fn split_block_by_rows(parent: &Block, small: &Rc<IndexSet>, big: &Rc<IndexSet>) -> (Block, Block) {
    let cols = parent.cols();
    let small_sizes: RowBlockSizes = small.iter().map(|r| (r, parent.row_block_size(r))).collect();
    let small_size: usize = small_sizes.values().sum();

    let mut small_block = Block::new(Rc::clone(small), Rc::clone(cols));
    small_block.set_size(small_size);
    small_block.set_row_block_sizes(Rc::new(small_sizes));

    let mut big_block = Block::new(Rc::clone(big), Rc::clone(cols));
    big_block.set_size(parent.size() - small_size);
    big_block.set_row_block_sizes(Rc::clone(parent.row_block_sizes()));

    (small_block, big_block)
}
