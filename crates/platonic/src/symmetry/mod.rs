//! Rotation symmetry: permutations, rotation groups and edge actions.
//!
//! Purpose
//! - Build a solid's full rotation group as vertex permutations by closing a
//!   small generator set under multiplication.
//! - Transport each vertex permutation to the edge index set and decompose it
//!   into cycles for the Burnside counter.
//!
//! Split
//! - `perm.rs` (image-array permutations, cycles), `rotation.rs` (matrices and
//!   vertex matching), `group.rs` (closure), `edge_map.rs` (edge action).

mod edge_map;
mod group;
mod perm;
mod rotation;

pub use edge_map::{edge_permutations, EdgeIndex};
pub use group::{Rotation, RotationGroup, SymmetryFamily};
pub use perm::Permutation;
pub use rotation::{axis_angle, ensure_proper_rotation, vertex_permutation};
