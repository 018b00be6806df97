use super::utils::parse_js_points;
use super::{leaf_ranges, permutation, split_planes, PointTree};
use crate::config::KdConfig;
use crate::kdtree::KdTree;
use crate::points::{flatten_points, points_from_flat};
use crate::policy::PointPolicy;
use crate::sampling::random_points_2d;
use wasm_bindgen::prelude::*;

/// WASM wrapper for a 2D KD-tree that owns its points.
#[wasm_bindgen(js_name = KdTree2D)]
pub struct KdTree2D {
    inner: PointTree<2>,
}

#[wasm_bindgen(js_class = KdTree2D)]
impl KdTree2D {
    /// Builds a tree over a flat `[x, y, ..]` buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], max_leaf_entries: usize) -> Result<KdTree2D, JsError> {
        let points = points_from_flat::<2>(points)?;
        Ok(Self::build(points, max_leaf_entries))
    }

    /// Builds a tree from an array of point arrays.
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(points: &JsValue, max_leaf_entries: usize) -> Result<KdTree2D, JsError> {
        let points = parse_js_points::<2>(points)?;
        Self::new(&flatten_points(&points), max_leaf_entries)
    }

    /// Builds a tree over `count` seeded random points in the unit square.
    pub fn random(count: usize, seed: u32, max_leaf_entries: usize) -> KdTree2D {
        Self::build(random_points_2d(count, seed as u64), max_leaf_entries)
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

impl KdTree2D {
    fn build(points: Vec<[f64; 2]>, max_leaf_entries: usize) -> KdTree2D {
        let config = KdConfig::new().max_leaf_entries(max_leaf_entries);
        KdTree2D { inner: KdTree::with_config(points, PointPolicy::new(), config) }
    }
}
