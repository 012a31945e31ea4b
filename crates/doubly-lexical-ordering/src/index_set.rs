use std::fmt::{Debug, Formatter};

/// A set of distinct non-negative integers.
///
/// The elements are kept sorted, so iteration is always ascending and two sets
/// with the same members compare equal regardless of how they were built. The
/// sum of the members, wrapping on overflow, is maintained alongside. It is
/// the bucket key of [BlockTable](crate::BlockTable).
#[derive(Clone, Default, Hash, Eq, PartialEq)]
pub struct IndexSet {
    values: Vec<usize>,
    sum: u64,
}

impl IndexSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set `{0, 1, ..., n - 1}`.
    pub fn full(n: usize) -> Self {
        (0..n).collect()
    }

    /// Insert `v`. Returns whether `v` was already present.
    pub fn add(&mut self, v: usize) -> bool {
        match self.values.binary_search(&v) {
            Ok(_) => true,
            Err(pos) => {
                self.values.insert(pos, v);
                self.sum = self.sum.wrapping_add(v as u64);
                false
            }
        }
    }

    /// Remove `v`. Returns whether `v` was present.
    pub fn remove(&mut self, v: usize) -> bool {
        match self.values.binary_search(&v) {
            Ok(pos) => {
                self.values.remove(pos);
                self.sum = self.sum.wrapping_sub(v as u64);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns whether `v` is a member.
    pub fn contains(&self, v: usize) -> bool {
        self.values.binary_search(&v).is_ok()
    }

    /// Returns the cardinality of the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the members in ascending order.
    pub fn values(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Return an iterator over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    /// Returns the smallest member.
    pub fn first(&self) -> Option<usize> {
        self.values.first().copied()
    }

    /// Returns the sum of all members modulo `2^64`.
    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Split the set into the members satisfying `pred` and the rest. Both
    /// halves stay sorted.
    pub fn partition<F>(&self, mut pred: F) -> (IndexSet, IndexSet)
    where
        F: FnMut(usize) -> bool,
    {
        let mut yes = IndexSet::new();
        let mut no = IndexSet::new();
        for v in self.iter() {
            let half = if pred(v) { &mut yes } else { &mut no };
            half.values.push(v);
            half.sum = half.sum.wrapping_add(v as u64);
        }
        (yes, no)
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut values: Vec<usize> = iter.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        let sum = values.iter().fold(0_u64, |sum, &v| sum.wrapping_add(v as u64));
        Self { values, sum }
    }
}

impl<const N: usize> From<[usize; N]> for IndexSet {
    fn from(values: [usize; N]) -> Self {
        values.into_iter().collect()
    }
}

impl Debug for IndexSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
