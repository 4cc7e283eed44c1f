//! 3D vertex tables and the combinatorics derived from them.
//!
//! Purpose
//! - Turn a unit-sphere vertex table into the edge set (minimum-distance pairs)
//!   and the triangular-face set (mutually adjacent triples).
//! - Provide the static tables for the five Platonic solids.
//!
//! Assumptions and conventions
//! - Edges are canonical `(lo, hi)` pairs; their position in the sorted edge
//!   list is the edge index used by permutations, cycles and subset masks.
//! - Validation against known edge/triangle counts happens in `crate::solid`,
//!   not here: extraction reports what the coordinates say.

pub(crate) mod cfg;
mod extract;
pub mod special;
mod types;
mod util;

pub use extract::{dual_vertices, edges_from_vertices, triangles_from_edges};
pub use types::{Edge, GeomCfg, SolidGeometry, Triangle};

#[cfg(test)]
mod tests;
