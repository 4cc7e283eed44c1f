//! Tolerance defaults for 3D vertex tables (internal).
//!
//! Policy
//! - Defaults are fixed constants; `GeomCfg` carries them so call sites can
//!   override a single value in tests without touching the rest.

/// Two vertex pairs belong to the same edge-length class within this distance.
pub(crate) const EDGE_EPS: f64 = 1e-6;
/// A rotated vertex matches a table vertex within this distance.
pub(crate) const MATCH_EPS: f64 = 1e-5;
/// Dual-vertex deduplication distance.
pub(crate) const DEDUP_EPS: f64 = 1e-8;
/// Orthogonality and determinant tolerance for rotation matrices (max-abs metric).
pub(crate) const ROT_EPS: f64 = 1e-8;
