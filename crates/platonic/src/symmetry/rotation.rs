//! Proper rotations: axis/angle construction, validation, and the induced
//! vertex permutation.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use super::perm::Permutation;
use crate::error::{PlatonicError, Result};

/// Rotation by `angle` (radians, right-handed) about `axis` (any nonzero length).
pub fn axis_angle(axis: Vector3<f64>, angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).into_inner()
}

/// Check `RᵀR ≈ I` and `det R ≈ +1` (max-abs metric).
pub fn ensure_proper_rotation(r: &Matrix3<f64>, eps: f64) -> Result<()> {
    let ortho = (r.transpose() * r - Matrix3::identity()).amax();
    if !(ortho <= eps) {
        return Err(PlatonicError::not_a_rotation(format!(
            "RᵀR deviates from I by {ortho:e}"
        )));
    }
    let det = r.determinant();
    if (det - 1.0).abs() > eps {
        return Err(PlatonicError::not_a_rotation(format!("det = {det}")));
    }
    Ok(())
}

/// Vertex permutation induced by `r`: `perm[i]` is the unique vertex within
/// `eps` of `r · v_i`.
///
/// Fails when a rotated vertex matches no vertex or several; a rotation that is
/// not a symmetry of the vertex set is rejected, never approximated.
pub fn vertex_permutation(
    r: &Matrix3<f64>,
    vertices: &[Vector3<f64>],
    eps: f64,
) -> Result<Permutation> {
    let mut images = Vec::with_capacity(vertices.len());
    for (i, v) in vertices.iter().enumerate() {
        let p = r * v;
        let mut hits = vertices
            .iter()
            .enumerate()
            .filter(|(_, w)| (p - *w).norm() < eps)
            .map(|(j, _)| j);
        let Some(j) = hits.next() else {
            return Err(PlatonicError::UnmatchedVertex { vertex: i });
        };
        if hits.next().is_some() {
            return Err(PlatonicError::AmbiguousVertex { vertex: i });
        }
        images.push(j);
    }
    Permutation::from_images(images)
}
