//! Seeded uniform point sets, mostly for tests and benchmarks.

use crate::bounds::BoundingBox;
use crate::error::KdError;
use rand::prelude::*;
use rand::rngs::StdRng;

/// `count` points drawn uniformly from `bounds`.
///
/// The same seed always produces the same points.
pub fn random_points<const D: usize>(count: usize, bounds: &BoundingBox<D>, seed: u64) -> Result<Vec<[f64; D]>, KdError> {
    bounds.validate()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let extent = bounds.extent();
    let points = (0..count)
        .map(|_| std::array::from_fn(|i| bounds.min[i] + rng.r#gen::<f64>() * extent[i]))
        .collect();
    Ok(points)
}

/// Points in the unit square.
pub fn random_points_2d(count: usize, seed: u64) -> Vec<[f64; 2]> {
    unit_points(count, seed)
}

/// Points in the unit cube.
pub fn random_points_3d(count: usize, seed: u64) -> Vec<[f64; 3]> {
    unit_points(count, seed)
}

fn unit_points<const D: usize>(count: usize, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| std::array::from_fn(|_| rng.r#gen::<f64>())).collect()
}
