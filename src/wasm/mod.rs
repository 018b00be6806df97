mod d2;
mod d3;
mod utils;

pub use d2::KdTree2D;
pub use d3::KdTree3D;

use crate::kdtree::KdTree;
use crate::policy::PointPolicy;

/// Tree over points owned by a WASM wrapper.
type PointTree<const D: usize> = KdTree<Vec<[f64; D]>, PointPolicy<f64, D>>;

/// `[begin, end, begin, end, ..]` for every leaf, lower leaves first.
fn leaf_ranges<const D: usize>(tree: &PointTree<D>) -> Vec<u32> {
    tree.leaves()
        .flat_map(|leaf| {
            let range = leaf.range();
            [range.begin as u32, range.end as u32]
        })
        .collect()
}

/// `[axis, split, ..]` for every internal node in allocation order.
fn split_planes<const D: usize>(tree: &PointTree<D>) -> Vec<u32> {
    tree.nodes()
        .filter_map(|node| Some([node.axis()? as u32, node.split()? as u32]))
        .flatten()
        .collect()
}

fn permutation<const D: usize>(tree: &PointTree<D>) -> Vec<u32> {
    tree.permutation().iter().map(|&i| i as u32).collect()
}
