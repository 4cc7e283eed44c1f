//! Subset predicates over edge bitmasks.
//!
//! - Connected on used vertices: the edges of the subset form one component.
//!   Flooding over edges that share an endpoint is equivalent to a traversal of
//!   the subgraph induced on the used vertices, and the empty subset is
//!   vacuously connected.
//! - Contains a triangular face: all three side bits of some face are set.

use crate::error::{PlatonicError, Result};
use crate::geom3::{Edge, Triangle};
use crate::symmetry::EdgeIndex;

use super::count::Counts;

/// Edge subset: bit `i` set means edge `i` is included.
pub type EdgeMask = u64;

/// Largest edge set whose cycle-union indices still fit a `u64`.
pub const MAX_EDGES: usize = 63;

#[inline]
pub(crate) fn bit(i: usize) -> EdgeMask {
    1 << i
}

/// Precomputed masks for one solid's edge and triangle sets.
#[derive(Clone, Debug)]
pub struct SubsetClassifier {
    /// `touching[e]`: edges sharing an endpoint with `e` (including `e`).
    touching: Vec<EdgeMask>,
    /// Side masks of the triangular faces.
    triangles: Vec<EdgeMask>,
}

impl SubsetClassifier {
    pub fn new(edges: &[Edge], triangles: &[Triangle]) -> Result<Self> {
        if edges.len() > MAX_EDGES {
            return Err(PlatonicError::TooManyEdges { edges: edges.len() });
        }
        let touching = edges
            .iter()
            .map(|e| {
                edges
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.lo == e.lo || f.lo == e.hi || f.hi == e.lo || f.hi == e.hi)
                    .fold(0, |m, (j, _)| m | bit(j))
            })
            .collect();
        let index = EdgeIndex::new(edges);
        let triangles = triangles
            .iter()
            .map(|t| {
                t.edges().iter().try_fold(0, |m, &side| {
                    index
                        .position(side)
                        .map(|j| m | bit(j))
                        .ok_or(PlatonicError::TriangleSideMissing {
                            triangle: t.vertices(),
                        })
                })
            })
            .collect::<Result<Vec<EdgeMask>>>()?;
        Ok(Self {
            touching,
            triangles,
        })
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.touching.len()
    }

    /// Whether the used vertices of `subset` induce a connected subgraph.
    pub fn is_connected(&self, subset: EdgeMask) -> bool {
        if subset == 0 {
            return true;
        }
        let mut reached = subset & subset.wrapping_neg();
        let mut frontier = reached;
        while frontier != 0 {
            let mut grown = 0;
            let mut rest = frontier;
            while rest != 0 {
                grown |= self.touching[rest.trailing_zeros() as usize];
                rest &= rest - 1;
            }
            frontier = grown & subset & !reached;
            reached |= frontier;
        }
        reached == subset
    }

    /// Whether `subset` includes all three sides of some triangular face.
    #[inline]
    pub fn contains_triangle(&self, subset: EdgeMask) -> bool {
        self.triangles.iter().any(|&t| subset & t == t)
    }

    /// Connected and triangle-free ("valid incomplete").
    #[inline]
    pub fn is_valid(&self, subset: EdgeMask) -> bool {
        self.is_connected(subset) && !self.contains_triangle(subset)
    }

    /// 0/1 contribution of one subset to each category.
    #[inline]
    pub fn classify(&self, subset: EdgeMask) -> Counts {
        let connected = self.is_connected(subset);
        let valid = connected && !self.contains_triangle(subset);
        Counts {
            all: 1,
            connected: connected as u64,
            valid: valid as u64,
        }
    }
}
