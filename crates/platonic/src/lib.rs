//! Rotation-distinct edge subsets of the Platonic solids.
//!
//! For each solid we count edge subsets up to proper rotation in three
//! categories: all subsets, subsets connected on their used vertices, and
//! connected subsets containing no complete triangular face. Counting uses
//! Burnside's lemma over the solid's rotation group.
//!
//! Layout
//! - `geom3`: vertex tables, edge and triangle extraction.
//! - `symmetry`: permutations, generator closure, edge action, cycles.
//! - `burnside`: subset predicates, cycle-union enumeration, aggregation.
//! - `solid`: the validated per-solid pipeline used by the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api`
//!   collects the entry points callers are expected to use.

pub mod api;
pub mod burnside;
pub mod error;
pub mod geom3;
pub mod solid;
pub mod symmetry;

pub use error::{PlatonicError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::burnside::{compute_counts, CountCfg, CountEvent, Counts};
    pub use crate::geom3::{Edge, GeomCfg, SolidGeometry, Triangle};
    pub use crate::solid::{Solid, SolidData, SolidReport};
    pub use crate::symmetry::{Permutation, RotationGroup};
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
