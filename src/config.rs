/// Smallest leaf threshold a tree is built with.
pub const MIN_LEAF_ENTRIES: usize = 2;

/// Construction settings for a [`KdTree`](crate::KdTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KdConfig {
    /// Ranges of at most this many entries become leaves. Values below
    /// [`MIN_LEAF_ENTRIES`] are raised to it.
    pub max_leaf_entries: usize,
}

impl KdConfig {
    pub fn new() -> Self {
        KdConfig { max_leaf_entries: MIN_LEAF_ENTRIES }
    }

    pub fn max_leaf_entries(mut self, max_leaf_entries: usize) -> Self {
        self.max_leaf_entries = max_leaf_entries;
        self
    }

    /// The threshold actually used for construction.
    pub fn effective_leaf_entries(&self) -> usize {
        self.max_leaf_entries.max(MIN_LEAF_ENTRIES)
    }
}

impl Default for KdConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_threshold_is_clamped() {
        assert_eq!(KdConfig::default().effective_leaf_entries(), 2);
        assert_eq!(KdConfig::new().max_leaf_entries(0).effective_leaf_entries(), 2);
        assert_eq!(KdConfig::new().max_leaf_entries(1).effective_leaf_entries(), 2);
        assert_eq!(KdConfig::new().max_leaf_entries(16).effective_leaf_entries(), 16);
    }
}
