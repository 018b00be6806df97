use crate::range::IndexRange;
use std::cmp::Ordering;

/// Index array that is reordered in place instead of the entries themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermutationArray {
    indices: Vec<usize>,
}

impl PermutationArray {
    /// `0, 1, .., len - 1`.
    pub fn identity(len: usize) -> Self {
        PermutationArray {
            indices: (0..len).collect(),
        }
    }

    /// Partitions `range` so that its middle slot holds the median under `cmp`, with every
    /// slot before it comparing less or equal and every slot after it greater or equal.
    /// Returns the entry index that ended up at the middle.
    ///
    /// Equal entries are ordered by entry index, which keeps the result deterministic.
    pub fn select_median<F>(&mut self, range: IndexRange, mut cmp: F) -> usize
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        debug_assert!(!range.is_empty(), "median of an empty range");
        let window = &mut self.indices[range.as_range()];
        let nth = range.size() / 2;
        window.select_nth_unstable_by(nth, |&a, &b| cmp(a, b).then(a.cmp(&b)));
        window[nth]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn slice(&self, range: IndexRange) -> &[usize] {
        &self.indices[range.as_range()]
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
