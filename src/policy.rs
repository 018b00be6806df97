use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

/// The operations a tree needs from its entry type.
///
/// A policy is a value handed to the builder rather than a property of the entry type,
/// so the same entry type can be indexed under different policies.
pub trait BoundPolicy {
    /// Entry type the policy operates on.
    type Entry: Clone;

    /// Number of axes. The split axis cycles through `0..DIM`.
    const DIM: usize;

    /// Elementwise minimum of two entries.
    fn min(&self, a: &Self::Entry, b: &Self::Entry) -> Self::Entry;

    /// Elementwise maximum of two entries.
    fn max(&self, a: &Self::Entry, b: &Self::Entry) -> Self::Entry;

    /// Whether `a` lies strictly before `b` on `axis`.
    fn less(&self, a: &Self::Entry, b: &Self::Entry, axis: usize) -> bool;

    /// Three-way comparison on `axis`, derived from [`less`](Self::less) unless overridden.
    fn compare(&self, a: &Self::Entry, b: &Self::Entry, axis: usize) -> Ordering {
        if self.less(a, b, axis) {
            Ordering::Less
        } else if self.less(b, a, axis) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Scalar coordinate with a total order.
pub trait Coordinate: Copy + PartialOrd + Debug {
    fn coord_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! float_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn coord_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

macro_rules! int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn coord_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

float_coordinate!(f32, f64);
int_coordinate!(i32, i64, u32, u64, usize);

/// Policy for fixed-size coordinate arrays `[C; D]`.
#[derive(Debug)]
pub struct PointPolicy<C, const D: usize> {
    _coord: PhantomData<fn() -> C>,
}

impl<C, const D: usize> PointPolicy<C, D> {
    pub fn new() -> Self {
        PointPolicy { _coord: PhantomData }
    }
}

impl<C, const D: usize> Default for PointPolicy<C, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const D: usize> Clone for PointPolicy<C, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const D: usize> Copy for PointPolicy<C, D> {}

impl<C: Coordinate, const D: usize> BoundPolicy for PointPolicy<C, D> {
    type Entry = [C; D];
    const DIM: usize = D;

    fn min(&self, a: &[C; D], b: &[C; D]) -> [C; D] {
        std::array::from_fn(|i| if b[i].coord_cmp(&a[i]).is_lt() { b[i] } else { a[i] })
    }

    fn max(&self, a: &[C; D], b: &[C; D]) -> [C; D] {
        std::array::from_fn(|i| if b[i].coord_cmp(&a[i]).is_gt() { b[i] } else { a[i] })
    }

    fn less(&self, a: &[C; D], b: &[C; D], axis: usize) -> bool {
        self.compare(a, b, axis).is_lt()
    }

    fn compare(&self, a: &[C; D], b: &[C; D], axis: usize) -> Ordering {
        debug_assert!(axis < D, "axis {axis} out of range for dimension {D}");
        a[axis].coord_cmp(&b[axis])
    }
}

/// Policy assembled from three closures, for entry types without a built-in policy.
///
/// ```
/// use kdsplit::{FnPolicy, KdTree};
///
/// #[derive(Clone)]
/// struct Star { pos: [f32; 2], mag: f32 }
///
/// let policy = FnPolicy::<Star, _, _, _, 2>::new(
///     |a: &Star, b: &Star| Star { pos: [a.pos[0].min(b.pos[0]), a.pos[1].min(b.pos[1])], mag: a.mag.min(b.mag) },
///     |a: &Star, b: &Star| Star { pos: [a.pos[0].max(b.pos[0]), a.pos[1].max(b.pos[1])], mag: a.mag.max(b.mag) },
///     |a: &Star, b: &Star, axis: usize| a.pos[axis] < b.pos[axis],
/// );
/// let stars = vec![Star { pos: [0.0, 1.0], mag: 2.0 }, Star { pos: [3.0, -1.0], mag: 1.0 }];
/// let tree = KdTree::new(&stars[..], policy);
/// assert_eq!(tree.min().unwrap().pos, [0.0, -1.0]);
/// ```
pub struct FnPolicy<T, Mn, Mx, Ls, const D: usize> {
    min: Mn,
    max: Mx,
    less: Ls,
    _entry: PhantomData<fn(&T) -> T>,
}

impl<T, Mn, Mx, Ls, const D: usize> FnPolicy<T, Mn, Mx, Ls, D>
where
    Mn: Fn(&T, &T) -> T,
    Mx: Fn(&T, &T) -> T,
    Ls: Fn(&T, &T, usize) -> bool,
{
    pub fn new(min: Mn, max: Mx, less: Ls) -> Self {
        FnPolicy {
            min,
            max,
            less,
            _entry: PhantomData,
        }
    }
}

impl<T, Mn, Mx, Ls, const D: usize> BoundPolicy for FnPolicy<T, Mn, Mx, Ls, D>
where
    T: Clone,
    Mn: Fn(&T, &T) -> T,
    Mx: Fn(&T, &T) -> T,
    Ls: Fn(&T, &T, usize) -> bool,
{
    type Entry = T;
    const DIM: usize = D;

    fn min(&self, a: &T, b: &T) -> T {
        (self.min)(a, b)
    }

    fn max(&self, a: &T, b: &T) -> T {
        (self.max)(a, b)
    }

    fn less(&self, a: &T, b: &T, axis: usize) -> bool {
        debug_assert!(axis < D, "axis {axis} out of range for dimension {D}");
        (self.less)(a, b, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_policy_elementwise() {
        let policy = PointPolicy::<f64, 3>::new();
        let a = [1.0, 5.0, -2.0];
        let b = [3.0, 0.0, -2.5];
        assert_eq!(policy.min(&a, &b), [1.0, 0.0, -2.5]);
        assert_eq!(policy.max(&a, &b), [3.0, 5.0, -2.0]);
        assert!(policy.less(&a, &b, 0));
        assert!(!policy.less(&a, &b, 1));
        assert_eq!(policy.compare(&a, &a, 2), Ordering::Equal);
    }

    #[test]
    fn test_point_policy_integers() {
        let policy = PointPolicy::<i32, 2>::new();
        assert_eq!(policy.min(&[4, -1], &[2, 7]), [2, -1]);
        assert_eq!(policy.compare(&[4, -1], &[2, 7], 1), Ordering::Less);
    }

    #[test]
    fn test_fn_policy_derives_compare_from_less() {
        let policy = FnPolicy::<(i32, i32), _, _, _, 2>::new(
            |a: &(i32, i32), b: &(i32, i32)| (a.0.min(b.0), a.1.min(b.1)),
            |a: &(i32, i32), b: &(i32, i32)| (a.0.max(b.0), a.1.max(b.1)),
            |a: &(i32, i32), b: &(i32, i32), axis: usize| if axis == 0 { a.0 < b.0 } else { a.1 < b.1 },
        );
        assert_eq!(policy.compare(&(1, 9), &(2, 0), 0), Ordering::Less);
        assert_eq!(policy.compare(&(1, 9), &(2, 0), 1), Ordering::Greater);
        assert_eq!(policy.compare(&(1, 9), &(1, 0), 0), Ordering::Equal);
        assert_eq!(policy.max(&(1, 9), &(2, 0)), (2, 9));
    }
}
