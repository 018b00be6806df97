use thiserror::Error;

/// Errors raised while turning raw input into tree entries.
///
/// Building a tree never fails; these only come from the input adapters
/// ([`points_from_flat`](crate::points_from_flat) and the [`sampling`](crate::sampling) helpers).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KdError {
    /// A flat coordinate buffer whose length is not a multiple of the dimension.
    #[error("coordinate buffer of length {len} is not a multiple of dimension {dim}")]
    RaggedCoordinates {
        /// Length of the buffer.
        len: usize,
        /// Expected dimension.
        dim: usize,
    },

    /// A NaN or infinite coordinate.
    #[error("entry {entry} has a non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate {
        /// Entry index the coordinate belongs to.
        entry: usize,
        /// Axis of the offending coordinate.
        axis: usize,
    },

    /// A box whose minimum exceeds its maximum.
    #[error("bounding box is inverted on axis {axis}")]
    InvertedBounds {
        /// First axis with `min > max`.
        axis: usize,
    },
}
