//! Error type shared by the geometry, symmetry and counting modules.
//!
//! Every variant is a construction or consistency defect: the inputs are fixed
//! vertex tables, so nothing here is expected to be recovered from at runtime.

use std::fmt;

/// Errors raised while building a solid's data or counting its subsets.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatonicError {
    /// Derived geometry disagrees with the solid's known combinatorics.
    GeometryMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A generator matrix is not a proper rotation.
    NotARotation { reason: String },
    /// A rotated vertex landed on no vertex of the solid.
    UnmatchedVertex { vertex: usize },
    /// A rotated vertex landed within tolerance of more than one vertex.
    AmbiguousVertex { vertex: usize },
    /// Group closure terminated with the wrong number of elements.
    GroupOrderMismatch { expected: usize, found: usize },
    /// A vertex permutation mapped an edge onto a non-edge.
    MissingEdge { from: (usize, usize), to: (usize, usize) },
    /// A triangular face has a side outside the edge set.
    TriangleSideMissing { triangle: [usize; 3] },
    /// An image array is not a bijection on `0..n`.
    InvalidPermutation { reason: String },
    /// Edge subsets and cycle-union indices are `u64` bitmasks.
    TooManyEdges { edges: usize },
    /// A Burnside total is not divisible by the group order.
    NonIntegralOrbitCount {
        category: &'static str,
        total: u64,
        order: usize,
    },
    /// The dedicated worker pool could not be started.
    WorkerPool { reason: String },
    /// The caller's cancellation flag was raised between work items.
    Cancelled,
}

impl PlatonicError {
    pub(crate) fn not_a_rotation(reason: impl Into<String>) -> Self {
        Self::NotARotation {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_permutation(reason: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlatonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometryMismatch {
                what,
                expected,
                found,
            } => write!(f, "geometry defect: expected {expected} {what}, found {found}"),
            Self::NotARotation { reason } => write!(f, "not a proper rotation: {reason}"),
            Self::UnmatchedVertex { vertex } => {
                write!(f, "rotation maps vertex {vertex} off the vertex set")
            }
            Self::AmbiguousVertex { vertex } => {
                write!(f, "rotated vertex {vertex} matches several vertices")
            }
            Self::GroupOrderMismatch { expected, found } => write!(
                f,
                "group construction defect: expected order {expected}, found {found}"
            ),
            Self::MissingEdge { from, to } => write!(
                f,
                "edge ({}, {}) maps to non-edge ({}, {})",
                from.0, from.1, to.0, to.1
            ),
            Self::TriangleSideMissing { triangle: [a, b, c] } => {
                write!(f, "triangle ({a}, {b}, {c}) has a side outside the edge set")
            }
            Self::InvalidPermutation { reason } => write!(f, "invalid permutation: {reason}"),
            Self::TooManyEdges { edges } => {
                write!(f, "{edges} edges exceed the 63-edge subset mask")
            }
            Self::NonIntegralOrbitCount {
                category,
                total,
                order,
            } => write!(
                f,
                "{category} total {total} is not divisible by group order {order}"
            ),
            Self::WorkerPool { reason } => write!(f, "worker pool: {reason}"),
            Self::Cancelled => write!(f, "counting cancelled"),
        }
    }
}

impl std::error::Error for PlatonicError {}

/// Library result alias.
pub type Result<T> = std::result::Result<T, PlatonicError>;
