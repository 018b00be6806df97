use crate::error::KdError;
#[allow(unused_imports)]
use crate::tracing_helpers::warn_log;

/// Splits an interleaved coordinate buffer (`x0, y0, z0, x1, y1, z1, ..`) into points.
///
/// Fails if the buffer length is not a multiple of `D` or if any coordinate is NaN or
/// infinite.
pub fn points_from_flat<const D: usize>(coords: &[f64]) -> Result<Vec<[f64; D]>, KdError> {
    if D == 0 || coords.len() % D != 0 {
        return Err(KdError::RaggedCoordinates { len: coords.len(), dim: D });
    }

    let mut points = Vec::with_capacity(coords.len() / D);
    for (entry, chunk) in coords.chunks_exact(D).enumerate() {
        if let Some(axis) = chunk.iter().position(|c| !c.is_finite()) {
            warn_log!(entry = entry, axis = axis, value = chunk[axis], "rejecting non-finite coordinate");
            return Err(KdError::NonFiniteCoordinate { entry, axis });
        }
        let mut point = [0.0; D];
        point.copy_from_slice(chunk);
        points.push(point);
    }
    Ok(points)
}

/// Inverse of [`points_from_flat`].
pub fn flatten_points<const D: usize>(points: &[[f64; D]]) -> Vec<f64> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_buffer_is_chunked() {
        let coords = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let points = points_from_flat::<3>(&coords).unwrap();
        assert_eq!(points, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(flatten_points(&points), coords.to_vec());

        let points = points_from_flat::<2>(&coords).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], [5.0, 6.0]);
    }

    #[test]
    fn test_ragged_buffer_is_rejected() {
        let err = points_from_flat::<3>(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, KdError::RaggedCoordinates { len: 4, dim: 3 });
        assert!(points_from_flat::<3>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = points_from_flat::<2>(&[0.0, 0.0, 1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, KdError::NonFiniteCoordinate { entry: 1, axis: 1 });
        assert_eq!(err.to_string(), "entry 1 has a non-finite coordinate on axis 1");
    }
}
