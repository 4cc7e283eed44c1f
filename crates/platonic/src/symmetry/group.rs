//! Rotation groups by generator closure.
//!
//! Algorithm
//! - Start from the identity. For every element of the current frontier and
//!   every generator `G`, form `G·A` and `A·G`, map the product to a vertex
//!   permutation, and keep it if the permutation is new.
//! - Stop after a frontier pass that discovers nothing.
//! - A product that does not permute the vertices aborts the closure: products
//!   of symmetries are symmetries, so this means a generator is wrong.
//!
//! The closure is checked against the family's known order by the caller
//! (`RotationGroup::close_checked`), never trusted implicitly.

use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

use nalgebra::{vector, Matrix3, Vector3};

use super::perm::Permutation;
use super::rotation::{axis_angle, ensure_proper_rotation, vertex_permutation};
use crate::error::{PlatonicError, Result};
use crate::geom3::special::PHI;
use crate::geom3::GeomCfg;

/// Rotation symmetry family of a Platonic solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymmetryFamily {
    /// Tetrahedron (A4).
    Tetrahedral,
    /// Cube and octahedron (S4).
    Octahedral,
    /// Icosahedron and dodecahedron (A5).
    Icosahedral,
}

impl SymmetryFamily {
    /// Order of the rotation group.
    pub fn order(self) -> usize {
        match self {
            Self::Tetrahedral => 12,
            Self::Octahedral => 24,
            Self::Icosahedral => 60,
        }
    }

    /// Two rotations generating the group, in the frame of `geom3::special`.
    pub fn generators(self) -> Vec<Matrix3<f64>> {
        let diag = vector![1.0, 1.0, 1.0];
        match self {
            Self::Tetrahedral => vec![axis_angle(diag, TAU / 3.0), axis_angle(Vector3::z(), PI)],
            Self::Octahedral => vec![
                axis_angle(Vector3::z(), PI / 2.0),
                axis_angle(diag, TAU / 3.0),
            ],
            // 5-fold vertex axis and an adjacent 3-fold face axis.
            Self::Icosahedral => vec![
                axis_angle(vector![0.0, 1.0, PHI], TAU / 5.0),
                axis_angle(diag, TAU / 3.0),
            ],
        }
    }
}

/// One symmetry operation: its matrix and the vertex permutation it induces.
#[derive(Clone, Debug)]
pub struct Rotation {
    pub matrix: Matrix3<f64>,
    pub perm: Permutation,
}

/// All rotations mapping a vertex set onto itself, identity first.
///
/// Invariants:
/// - Permutations are pairwise distinct and closed under composition.
/// - `elements[0]` is the identity.
#[derive(Clone, Debug)]
pub struct RotationGroup {
    elements: Vec<Rotation>,
}

impl RotationGroup {
    /// Group containing only the identity.
    pub fn trivial(vertex_count: usize) -> Self {
        Self {
            elements: vec![Rotation {
                matrix: Matrix3::identity(),
                perm: Permutation::identity(vertex_count),
            }],
        }
    }

    /// Breadth-first closure of `generators` acting on `vertices`.
    pub fn close(
        vertices: &[Vector3<f64>],
        generators: &[Matrix3<f64>],
        cfg: &GeomCfg,
    ) -> Result<Self> {
        for g in generators {
            ensure_proper_rotation(g, cfg.eps_rot)?;
        }
        let mut group = Self::trivial(vertices.len());
        let mut seen: HashSet<Permutation> = HashSet::new();
        seen.insert(group.elements[0].perm.clone());
        let mut frontier = vec![Matrix3::identity()];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for a in &frontier {
                for g in generators {
                    for r in [g * a, a * g] {
                        let perm = vertex_permutation(&r, vertices, cfg.eps_match)?;
                        if seen.insert(perm.clone()) {
                            group.elements.push(Rotation { matrix: r, perm });
                            next.push(r);
                        }
                    }
                }
            }
            frontier = next;
        }
        Ok(group)
    }

    /// `close` followed by the order check.
    pub fn close_checked(
        vertices: &[Vector3<f64>],
        family: SymmetryFamily,
        cfg: &GeomCfg,
    ) -> Result<Self> {
        let group = Self::close(vertices, &family.generators(), cfg)?;
        if group.order() != family.order() {
            return Err(PlatonicError::GroupOrderMismatch {
                expected: family.order(),
                found: group.order(),
            });
        }
        Ok(group)
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn elements(&self) -> &[Rotation] {
        &self.elements
    }

    pub fn vertex_permutations(&self) -> impl Iterator<Item = &Permutation> {
        self.elements.iter().map(|r| &r.perm)
    }

    /// Whether `perm` is (the vertex permutation of) an element.
    pub fn contains(&self, perm: &Permutation) -> bool {
        self.elements.iter().any(|r| &r.perm == perm)
    }
}
