//! Small utilities: unit normalization and tolerance-based point dedup.

use nalgebra::Vector3;

/// Scale to unit length; the zero vector is returned unchanged.
#[inline]
pub(crate) fn unit(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(f64::EPSILON).unwrap_or(v)
}

/// Keep the first point of every cluster closer than `tol`, preserving order.
pub(crate) fn dedup_points(points: &[Vector3<f64>], tol: f64) -> Vec<Vector3<f64>> {
    let mut out: Vec<Vector3<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| (p - q).amax() <= tol) {
            out.push(*p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn unit_keeps_zero_and_normalizes_others() {
        assert_eq!(unit(Vector3::zeros()), Vector3::zeros());
        let u = unit(vector![3.0, 0.0, 4.0]);
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn dedup_keeps_first_representative() {
        let pts = vec![
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![1.0 + 1e-12, 0.0, 0.0],
        ];
        let d = dedup_points(&pts, 1e-8);
        assert_eq!(d.len(), 2);
        assert_eq!(d[0], pts[0]);
    }
}
