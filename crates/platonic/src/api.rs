//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and experiments. Breaking changes are allowed.

// Geometry
pub use crate::geom3::{
    dual_vertices, edges_from_vertices, special, triangles_from_edges, Edge, GeomCfg,
    SolidGeometry, Triangle,
};
// Symmetry
pub use crate::symmetry::{
    axis_angle, edge_permutations, vertex_permutation, EdgeIndex, Permutation, Rotation,
    RotationGroup, SymmetryFamily,
};
// Counting
pub use crate::burnside::{
    burnside_totals, compute_counts, compute_counts_with, cycle_masks, orbit_counts, CountCfg,
    CountEvent, CountObserver, Counts, CycleUnions, EdgeMask, NoopObserver, SubsetClassifier,
};
// Pipeline
pub use crate::solid::{KnownCounts, ParseSolidError, Solid, SolidData, SolidReport};
pub use crate::error::{PlatonicError, Result};
