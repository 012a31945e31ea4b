use std::ops::Index;
use std::rc::Rc;

use crate::index_set::IndexSet;

/// An ordered partition of `0..n` into non-empty parts.
///
/// Parts are only ever replaced by two non-empty halves at the same
/// position, so the sequence of parts read left to right is the permutation
/// computed so far.
#[derive(Debug)]
pub(crate) struct OrderedPartition {
    parts: Vec<Rc<IndexSet>>,
}

impl OrderedPartition {
    pub(crate) fn new(n: usize) -> Self {
        let mut parts = Vec::with_capacity(n);
        if n > 0 {
            parts.push(Rc::new(IndexSet::full(n)));
        }
        Self { parts }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.parts.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<IndexSet>> {
        self.parts.iter()
    }

    /// Replace the part at `pos` by `first` followed by `second`.
    pub(crate) fn split(&mut self, pos: usize, first: Rc<IndexSet>, second: Rc<IndexSet>) {
        debug_assert!(!first.is_empty() && !second.is_empty());
        debug_assert_eq!(first.len() + second.len(), self.parts[pos].len());
        debug_assert!(first.iter().chain(second.iter()).all(|v| self.parts[pos].contains(v)));
        self.parts[pos] = first;
        self.parts.insert(pos + 1, second);
    }

    /// Concatenate the parts.
    pub(crate) fn permutation(&self) -> Vec<usize> {
        self.parts.iter().flat_map(|part| part.iter()).collect()
    }
}

impl Index<usize> for OrderedPartition {
    type Output = Rc<IndexSet>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.parts[index]
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use super::OrderedPartition;
    use crate::IndexSet;

    fn to_vecs(p: &OrderedPartition) -> Vec<Vec<usize>> {
        p.iter().map(|part| part.values()).collect()
    }

    #[test]
    fn empty() {
        let p = OrderedPartition::new(0);
        assert_eq!(p.len(), 0);
        assert!(p.permutation().is_empty());
    }

    #[test]
    fn split() {
        let mut p = OrderedPartition::new(6);
        assert_eq!(to_vecs(&p), [[0, 1, 2, 3, 4, 5]]);

        p.split(0, Rc::new(IndexSet::from([1, 4])), Rc::new(IndexSet::from([0, 2, 3, 5])));
        assert_eq!(to_vecs(&p), [vec![1, 4], vec![0, 2, 3, 5]]);

        p.split(1, Rc::new(IndexSet::from([5])), Rc::new(IndexSet::from([0, 2, 3])));
        p.split(0, Rc::new(IndexSet::from([4])), Rc::new(IndexSet::from([1])));
        assert_eq!(to_vecs(&p), [vec![4], vec![1], vec![5], vec![0, 2, 3]]);
        assert_eq!(p.permutation(), [4, 1, 5, 0, 2, 3]);
        assert_eq!(p[2].values(), [5]);
    }
}
