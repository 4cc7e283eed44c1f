//! Vertex permutation → edge permutation.

use std::collections::HashMap;

use super::perm::Permutation;
use crate::error::{PlatonicError, Result};
use crate::geom3::Edge;

/// Canonical edge → position in the edge list.
#[derive(Clone, Debug)]
pub struct EdgeIndex<'a> {
    edges: &'a [Edge],
    index: HashMap<Edge, usize>,
}

impl<'a> EdgeIndex<'a> {
    pub fn new(edges: &'a [Edge]) -> Self {
        let index = edges.iter().enumerate().map(|(i, &e)| (e, i)).collect();
        Self { edges, index }
    }

    #[inline]
    pub fn position(&self, e: Edge) -> Option<usize> {
        self.index.get(&e).copied()
    }

    /// Map every edge's endpoints through `vperm` and resolve the image edge.
    ///
    /// A miss means `vperm` does not preserve adjacency; it is reported, not skipped.
    pub fn edge_permutation(&self, vperm: &Permutation) -> Result<Permutation> {
        let images = self
            .edges
            .iter()
            .map(|e| {
                let to = Edge::new(vperm.image(e.lo), vperm.image(e.hi));
                self.position(to).ok_or(PlatonicError::MissingEdge {
                    from: e.endpoints(),
                    to: to.endpoints(),
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        Permutation::from_images(images)
    }
}

/// Edge permutations for a sequence of vertex permutations, in order.
pub fn edge_permutations<'p>(
    edges: &[Edge],
    vperms: impl IntoIterator<Item = &'p Permutation>,
) -> Result<Vec<Permutation>> {
    let index = EdgeIndex::new(edges);
    vperms
        .into_iter()
        .map(|p| index.edge_permutation(p))
        .collect()
}
