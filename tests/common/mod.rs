//! Shared checks for the integration tests.
//!
//! Set `RUST_LOG=kdsplit=debug` and run with `--features tracing` to see construction logs.

#![allow(dead_code)]

use kdsplit::{KdTree, PointPolicy};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a console subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

pub type PointTree<'a, const D: usize> = KdTree<&'a [[f64; D]], PointPolicy<f64, D>>;

/// Leaf ranges, visited lower-first, tile `[0, n)` and the permutation is a permutation.
pub fn assert_coverage<const D: usize>(tree: &PointTree<'_, D>) {
    let n = tree.len();
    let mut next = 0;
    for leaf in tree.leaves() {
        let range = leaf.range();
        assert_eq!(range.begin, next, "gap or overlap before leaf {:?}", leaf);
        assert!(range.size() >= 1, "empty leaf {:?}", leaf);
        assert!(range.size() <= tree.max_leaf_entries(), "oversized leaf {:?}", leaf);
        next = range.end;
    }
    assert_eq!(next, n, "leaves stop short of the entry count");

    let mut seen = vec![false; n];
    for &i in tree.permutation() {
        assert!(!seen[i], "entry {} appears twice", i);
        seen[i] = true;
    }
    assert!(seen.iter().all(|&s| s), "permutation misses an entry");
}

/// Every entry below a split is `<=` the median on the split axis, every entry above is `>=`.
pub fn assert_median_property<const D: usize>(tree: &PointTree<'_, D>) {
    let points = tree.entries();
    for node in tree.nodes() {
        let Some((lower, upper)) = node.children() else { continue };
        let axis = node.axis().unwrap();
        let split = node.split().unwrap();
        let pivot = points[split][axis];

        assert_eq!(node.range().middle(), upper.range().begin);
        assert_eq!(tree.permutation()[upper.range().begin], split);
        for &i in lower.indices() {
            assert!(points[i][axis] <= pivot, "entry {} above split {} on axis {}", i, split, axis);
        }
        for &i in upper.indices() {
            assert!(points[i][axis] >= pivot, "entry {} below split {} on axis {}", i, split, axis);
        }
    }
}

/// The tree bound equals the elementwise extremes of all points.
pub fn assert_bounds<const D: usize>(tree: &PointTree<'_, D>, points: &[[f64; D]]) {
    let (min, max) = tree.bounds().expect("built tree has bounds");
    for axis in 0..D {
        let lo = points.iter().map(|p| p[axis]).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p[axis]).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min[axis], lo, "min mismatch on axis {}", axis);
        assert_eq!(max[axis], hi, "max mismatch on axis {}", axis);
    }
}

/// `ceil(log2(n / k)) + 1`, the deepest level a tree over `n` entries may reach.
pub fn depth_limit(n: usize, k: usize) -> usize {
    let mut levels = 0;
    while k << levels < n {
        levels += 1;
    }
    levels + 1
}

/// Axis of every internal node equals its depth modulo `D`.
pub fn assert_axis_cycles<const D: usize>(tree: &PointTree<'_, D>) {
    let Some(root) = tree.root() else { return };
    let mut stack = vec![(root, 0usize)];
    while let Some((node, level)) = stack.pop() {
        if let Some((lower, upper)) = node.children() {
            assert_eq!(node.axis(), Some(level % D));
            stack.push((lower, level + 1));
            stack.push((upper, level + 1));
        }
    }
}
