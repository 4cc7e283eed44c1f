//! Basic 3D types: canonical edges, triangular faces and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for edge clustering, vertex matching,
//!   dual dedup and rotation checks.
//! - `Edge`, `Triangle`: vertex-index tuples stored in canonical (sorted) order.
//! - `SolidGeometry`: vertex table plus the derived edge and triangle sets.

use nalgebra::Vector3;

use super::cfg::{DEDUP_EPS, EDGE_EPS, MATCH_EPS, ROT_EPS};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_edge: f64,
    pub eps_match: f64,
    pub eps_dedup: f64,
    pub eps_rot: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_edge: EDGE_EPS,
            eps_match: MATCH_EPS,
            eps_dedup: DEDUP_EPS,
            eps_rot: ROT_EPS,
        }
    }
}

/// Unordered vertex pair, stored with `lo < hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub lo: usize,
    pub hi: usize,
}

impl Edge {
    /// Canonicalize an unordered pair. `a == b` is a caller bug.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "edge endpoints must differ");
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

/// Three mutually adjacent vertices, sorted ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut v = [a, b, c];
        v.sort_unstable();
        Self(v)
    }

    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        self.0
    }

    /// The three sides as canonical edges.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(a, c)]
    }
}

/// Vertex table with derived edges and triangular faces.
///
/// Invariants:
/// - `edges` is sorted and every edge indexes into `vertices`.
/// - `triangles` is sorted; each triangle's sides are all in `edges`.
/// - Immutable after construction; downstream code indexes edges by position.
#[derive(Clone, Debug)]
pub struct SolidGeometry {
    pub vertices: Vec<Vector3<f64>>,
    pub edges: Vec<Edge>,
    pub triangles: Vec<Triangle>,
}

impl SolidGeometry {
    /// Extract edges (minimum-distance pairs) and triangles from a vertex table.
    pub fn from_vertices(vertices: Vec<Vector3<f64>>, cfg: &GeomCfg) -> Self {
        let edges = super::extract::edges_from_vertices(&vertices, cfg.eps_edge);
        let triangles = super::extract::triangles_from_edges(vertices.len(), &edges);
        Self {
            vertices,
            edges,
            triangles,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn has_triangles(&self) -> bool {
        !self.triangles.is_empty()
    }
}
