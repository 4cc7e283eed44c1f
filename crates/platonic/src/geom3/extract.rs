//! Edge and triangular-face extraction from a vertex table.
//!
//! Algorithm
//! - Edges: all pairwise distances; keep the pairs within `eps` of the minimum.
//! - Triangles: every vertex triple whose three sides are edges.
//! - Dual vertices: normalized triangle centroids, deduplicated.

use std::collections::HashSet;

use nalgebra::Vector3;

use super::types::{Edge, Triangle};
use super::util::{dedup_points, unit};

/// Vertex pairs at minimum pairwise distance, canonical and sorted.
///
/// Returns an empty set for fewer than two vertices.
pub fn edges_from_vertices(vertices: &[Vector3<f64>], eps: f64) -> Vec<Edge> {
    let n = vertices.len();
    let dist = |i: usize, j: usize| (vertices[i] - vertices[j]).norm();
    let mut min_d = f64::INFINITY;
    for i in 0..n {
        for j in i + 1..n {
            min_d = min_d.min(dist(i, j));
        }
    }
    if !min_d.is_finite() {
        return Vec::new();
    }
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if (dist(i, j) - min_d).abs() < eps {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// Every triple of mutually adjacent vertices, sorted.
pub fn triangles_from_edges(vertex_count: usize, edges: &[Edge]) -> Vec<Triangle> {
    let edge_set: HashSet<Edge> = edges.iter().copied().collect();
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    for e in edges {
        neighbors[e.lo].push(e.hi);
    }
    for nb in neighbors.iter_mut() {
        nb.sort_unstable();
    }
    let mut out = Vec::new();
    for a in 0..vertex_count {
        let nb = &neighbors[a];
        for (k, &b) in nb.iter().enumerate() {
            for &c in &nb[k + 1..] {
                if edge_set.contains(&Edge::new(b, c)) {
                    out.push(Triangle::new(a, b, c));
                }
            }
        }
    }
    out.sort_unstable();
    out
}

/// Vertices of the dual solid: unit-normalized centroids of `triangles`,
/// deduplicated within `tol` in first-seen order.
pub fn dual_vertices(
    vertices: &[Vector3<f64>],
    triangles: &[Triangle],
    tol: f64,
) -> Vec<Vector3<f64>> {
    let centers: Vec<Vector3<f64>> = triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.vertices();
            unit((vertices[a] + vertices[b] + vertices[c]) / 3.0)
        })
        .collect();
    dedup_points(&centers, tol)
}
