//! Burnside counting of rotation-distinct edge subsets.
//!
//! Purpose
//! - For every group element, enumerate the unions of its edge cycles (exactly
//!   the subsets it fixes), classify each union, and sum per category.
//! - Divide the sums by the group order. Both predicates are invariant under
//!   rotations, so each quotient is the number of orbits satisfying it.
//!
//! Assumptions and conventions
//! - Edge subsets are `u64` masks over the solid's edge indices (≤ 63 edges).
//! - Enumeration is lazy (`CycleUnions`); memory does not grow with `2^c`.
//! - The identity contributes `2^|E|` unions and dominates the running time;
//!   batching splits it across workers.
//!
//! Split
//! - `classify.rs` (connectivity and triangle predicates), `unions.rs` (Gray-code
//!   union iterator), `count.rs` (work plan, map-reduce, division).

mod classify;
mod count;
mod unions;

pub use classify::{EdgeMask, SubsetClassifier, MAX_EDGES};
pub use count::{
    burnside_totals, compute_counts, compute_counts_with, cycle_masks, orbit_counts, CountCfg,
    CountEvent, CountObserver, Counts, NoopObserver,
};
pub use unions::{union_count, union_of, CycleUnions};
