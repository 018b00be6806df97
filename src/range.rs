use std::ops::Range;

/// Half-open window `[begin, end)` into the permutation array of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub begin: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "malformed range [{begin}, {end})");
        IndexRange { begin, end }
    }

    /// The window covering all `len` slots.
    pub fn full(len: usize) -> Self {
        IndexRange { begin: 0, end: len }
    }

    pub fn size(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Slot of the median, biased towards `begin` for even sizes.
    pub fn middle(&self) -> usize {
        self.begin + self.size() / 2
    }

    /// `[begin, middle)`.
    pub fn lower(&self) -> IndexRange {
        IndexRange { begin: self.begin, end: self.middle() }
    }

    /// `[middle, end)`. Together with [`lower`](Self::lower) this covers the window exactly.
    pub fn upper(&self) -> IndexRange {
        IndexRange { begin: self.middle(), end: self.end }
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.begin <= slot && slot < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<IndexRange> for Range<usize> {
    fn from(r: IndexRange) -> Self {
        r.as_range()
    }
}
