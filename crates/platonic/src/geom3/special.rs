//! Vertex tables for the five Platonic solids, normalized to the unit sphere.
//!
//! The tables are input data. Index order is fixed so edge indices stay stable
//! across runs; the dodecahedron is derived as the icosahedron's dual.
//!
//! Conventions
//! - All five share one frame: the cube/octahedron 4-fold axes are the
//!   coordinate axes, `(1,1,1)` is a 3-fold axis of every solid, and
//!   `(0,1,φ)` is a 5-fold axis of the icosahedron and dodecahedron.

use nalgebra::{vector, Vector3};

use super::cfg::{DEDUP_EPS, EDGE_EPS};
use super::extract::{dual_vertices, edges_from_vertices, triangles_from_edges};
use super::util::unit;

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

fn normalized(raw: &[[f64; 3]]) -> Vec<Vector3<f64>> {
    raw.iter().map(|&[x, y, z]| unit(vector![x, y, z])).collect()
}

/// Regular tetrahedron inscribed in the cube `[-1,1]^3`.
pub fn tetrahedron() -> Vec<Vector3<f64>> {
    normalized(&[
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ])
}

/// Sign triples `(±1,±1,±1)`, lexicographic with `-1 < 1`.
pub fn cube() -> Vec<Vector3<f64>> {
    let s = [-1.0, 1.0];
    let mut raw = Vec::with_capacity(8);
    for &x in &s {
        for &y in &s {
            for &z in &s {
                raw.push([x, y, z]);
            }
        }
    }
    normalized(&raw)
}

/// `+x, -x, +y, -y, +z, -z`.
pub fn octahedron() -> Vec<Vector3<f64>> {
    normalized(&[
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ])
}

/// Cyclic permutations of `(0, ±1, ±φ)`.
pub fn icosahedron() -> Vec<Vector3<f64>> {
    let p = PHI;
    normalized(&[
        [0.0, -1.0, -p],
        [0.0, -1.0, p],
        [0.0, 1.0, -p],
        [0.0, 1.0, p],
        [-1.0, -p, 0.0],
        [-1.0, p, 0.0],
        [1.0, -p, 0.0],
        [1.0, p, 0.0],
        [-p, 0.0, -1.0],
        [p, 0.0, -1.0],
        [-p, 0.0, 1.0],
        [p, 0.0, 1.0],
    ])
}

/// Normalized face centroids of `icosahedron()`, one per triangular face.
pub fn dodecahedron() -> Vec<Vector3<f64>> {
    let ico = icosahedron();
    let edges = edges_from_vertices(&ico, EDGE_EPS);
    let triangles = triangles_from_edges(ico.len(), &edges);
    dual_vertices(&ico, &triangles, DEDUP_EPS)
}
