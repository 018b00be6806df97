use crate::error::KdError;

/// Generic axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Box spanned by two opposite corners given in any order.
    pub fn from_corners(a: [f64; D], b: [f64; D]) -> Self {
        Self {
            min: std::array::from_fn(|i| a[i].min(b[i])),
            max: std::array::from_fn(|i| a[i].max(b[i])),
        }
    }

    /// The `[0, 1]^D` box.
    pub fn unit() -> Self {
        Self { min: [0.0; D], max: [1.0; D] }
    }

    /// Smallest box containing all `points`, `None` for an empty slice.
    pub fn from_points(points: &[[f64; D]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { min: *first, max: *first };
        for p in rest {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Checks that `min <= max` on every axis.
    pub fn validate(&self) -> Result<(), KdError> {
        match (0..D).find(|&axis| self.min[axis] > self.max[axis]) {
            Some(axis) => Err(KdError::InvertedBounds { axis }),
            None => Ok(()),
        }
    }

    /// Grows the box to include `point`.
    pub fn extend(&mut self, point: &[f64; D]) {
        for i in 0..D {
            if point[i] < self.min[i] { self.min[i] = point[i]; }
            if point[i] > self.max[i] { self.max[i] = point[i]; }
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.extend(&other.min);
        out.extend(&other.max);
        out
    }

    /// Closed containment test.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    pub fn extent(&self) -> [f64; D] {
        std::array::from_fn(|i| self.max[i] - self.min[i])
    }

    pub fn center(&self) -> [f64; D] {
        std::array::from_fn(|i| 0.5 * (self.min[i] + self.max[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [[1.0, 4.0], [-2.0, 5.0], [0.0, -1.0]];
        let b = BoundingBox::from_points(&points).unwrap();
        assert_eq!(b.min, [-2.0, -1.0]);
        assert_eq!(b.max, [1.0, 5.0]);
        assert!(BoundingBox::<2>::from_points(&[]).is_none());
    }

    #[test]
    fn test_from_corners_orders_each_axis() {
        let b = BoundingBox::from_corners([3.0, -1.0, 2.0], [1.0, 4.0, 2.0]);
        assert_eq!(b.min, [1.0, -1.0, 2.0]);
        assert_eq!(b.max, [3.0, 4.0, 2.0]);
        assert!(b.validate().is_ok());
        assert_eq!(b, BoundingBox::from_corners(b.max, b.min));
    }

    #[test]
    fn test_union_and_contains() {
        let a = BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = BoundingBox::new([2.0, -1.0, 0.5], [3.0, 0.5, 0.75]);
        let u = a.union(&b);
        assert_eq!(u.min, [0.0, -1.0, 0.0]);
        assert_eq!(u.max, [3.0, 1.0, 1.0]);
        assert!(u.contains(&[2.5, 0.0, 0.6]));
        assert!(!a.contains(&[2.5, 0.0, 0.6]));
        assert_eq!(u.center(), [1.5, 0.0, 0.5]);
    }

    #[test]
    fn test_validate() {
        assert!(BoundingBox::<3>::unit().validate().is_ok());
        let bad = BoundingBox::new([0.0, 2.0], [1.0, 1.0]);
        assert_eq!(bad.validate(), Err(KdError::InvertedBounds { axis: 1 }));
    }
}
