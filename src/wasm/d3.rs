use super::utils::parse_js_points;
use super::{leaf_ranges, permutation, split_planes, PointTree};
use crate::config::KdConfig;
use crate::kdtree::KdTree;
use crate::points::{flatten_points, points_from_flat};
use crate::policy::PointPolicy;
use crate::sampling::random_points_3d;
use wasm_bindgen::prelude::*;

/// WASM wrapper for a 3D KD-tree that owns its points.
#[wasm_bindgen(js_name = KdTree3D)]
pub struct KdTree3D {
    inner: PointTree<3>,
}

#[wasm_bindgen(js_class = KdTree3D)]
impl KdTree3D {
    /// Builds a tree over a flat `[x, y, z, ..]` buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], max_leaf_entries: usize) -> Result<KdTree3D, JsError> {
        let points = points_from_flat::<3>(points)?;
        Ok(Self::build(points, max_leaf_entries))
    }

    /// Builds a tree from an array of point arrays.
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(points: &JsValue, max_leaf_entries: usize) -> Result<KdTree3D, JsError> {
        let points = parse_js_points::<3>(points)?;
        Self::new(&flatten_points(&points), max_leaf_entries)
    }

    /// Builds a tree over `count` seeded random points in the unit cube.
    pub fn random(count: usize, seed: u32, max_leaf_entries: usize) -> KdTree3D {
        Self::build(random_points_3d(count, seed as u64), max_leaf_entries)
    }

    #[wasm_bindgen(getter)]
    pub fn is_built(&self) -> bool { self.inner.is_built() }
    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize { self.inner.len() }
    #[wasm_bindgen(getter)]
    pub fn count_nodes(&self) -> usize { self.inner.node_count() }
    #[wasm_bindgen(getter)]
    pub fn count_leaves(&self) -> usize { self.inner.leaf_count() }
    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize { self.inner.depth() }
    #[wasm_bindgen(getter)]
    pub fn max_leaf_entries(&self) -> usize { self.inner.max_leaf_entries() }
    pub fn min(&self) -> Option<Vec<f64>> { self.inner.min().map(|m| m.to_vec()) }
    pub fn max(&self) -> Option<Vec<f64>> { self.inner.max().map(|m| m.to_vec()) }
    pub fn root_split(&self) -> Option<u32> { self.inner.root()?.split().map(|s| s as u32) }
    pub fn get_point(&self, index: usize) -> Option<Vec<f64>> { self.inner.entries().get(index).map(|p| p.to_vec()) }
    pub fn leaf_ranges(&self) -> Vec<u32> { leaf_ranges(&self.inner) }
    pub fn split_planes(&self) -> Vec<u32> { split_planes(&self.inner) }
    pub fn permutation(&self) -> Vec<u32> { permutation(&self.inner) }
}

impl KdTree3D {
    fn build(points: Vec<[f64; 3]>, max_leaf_entries: usize) -> KdTree3D {
        let config = KdConfig::new().max_leaf_entries(max_leaf_entries);
        KdTree3D { inner: KdTree::with_config(points, PointPolicy::new(), config) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tree_shape() {
        let tree = KdTree3D::random(100, 1, 3);
        assert!(tree.is_built());
        assert_eq!(tree.count_points(), 100);
        assert_eq!(tree.count_nodes(), 2 * tree.count_leaves() - 1);
        assert_eq!(tree.leaf_ranges().last(), Some(&100));
        assert_eq!(tree.permutation().len(), 100);
        assert_eq!(tree.split_planes().len(), 2 * (tree.count_nodes() - tree.count_leaves()));
    }
}
