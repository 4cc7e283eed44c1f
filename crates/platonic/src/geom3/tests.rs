use super::special::{cube, dodecahedron, icosahedron, octahedron, tetrahedron};
use super::*;
use nalgebra::{vector, Rotation3, Unit, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn counts(vertices: Vec<Vector3<f64>>) -> (usize, usize, usize) {
    let g = SolidGeometry::from_vertices(vertices, &GeomCfg::default());
    (g.vertex_count(), g.edge_count(), g.triangles.len())
}

#[test]
fn platonic_tables_have_known_combinatorics() {
    assert_eq!(counts(tetrahedron()), (4, 6, 4));
    assert_eq!(counts(cube()), (8, 12, 0));
    assert_eq!(counts(octahedron()), (6, 12, 8));
    assert_eq!(counts(icosahedron()), (12, 30, 20));
    assert_eq!(counts(dodecahedron()), (20, 30, 0));
}

#[test]
fn tables_lie_on_unit_sphere() {
    for vs in [tetrahedron(), cube(), octahedron(), icosahedron(), dodecahedron()] {
        assert!(vs.iter().all(|v| (v.norm() - 1.0).abs() < 1e-12));
    }
}

#[test]
fn edges_are_canonical_and_sorted() {
    let g = SolidGeometry::from_vertices(icosahedron(), &GeomCfg::default());
    assert!(g.edges.iter().all(|e| e.lo < e.hi));
    assert!(g.edges.windows(2).all(|w| w[0] < w[1]));
    // every vertex of the icosahedron has degree 5
    let mut deg = vec![0usize; g.vertex_count()];
    for e in &g.edges {
        deg[e.lo] += 1;
        deg[e.hi] += 1;
    }
    assert!(deg.iter().all(|&d| d == 5));
}

#[test]
fn triangle_sides_are_edges() {
    let g = SolidGeometry::from_vertices(octahedron(), &GeomCfg::default());
    for t in &g.triangles {
        let [a, b, c] = t.vertices();
        assert!(a < b && b < c);
        for e in t.edges() {
            assert!(g.edges.binary_search(&e).is_ok());
        }
    }
    // opposite vertices +x/-x never share a face
    assert!(g.triangles.iter().all(|t| !(t.0.contains(&0) && t.0.contains(&1))));
}

#[test]
fn cube_edges_differ_in_one_coordinate() {
    let g = SolidGeometry::from_vertices(cube(), &GeomCfg::default());
    for e in &g.edges {
        let d = g.vertices[e.lo] - g.vertices[e.hi];
        let moved = d.iter().filter(|x| x.abs() > 1e-9).count();
        assert_eq!(moved, 1);
    }
}

#[test]
fn dual_of_cube_is_empty_and_of_octahedron_is_cube() {
    let c = SolidGeometry::from_vertices(cube(), &GeomCfg::default());
    assert!(dual_vertices(&c.vertices, &c.triangles, 1e-8).is_empty());
    let o = SolidGeometry::from_vertices(octahedron(), &GeomCfg::default());
    let d = dual_vertices(&o.vertices, &o.triangles, 1e-8);
    assert_eq!(counts(d), (8, 12, 0));
}

#[test]
fn extraction_is_rotation_invariant_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..8 {
        let axis = vector![
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0)
        ];
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let r = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
        let rotated: Vec<_> = dodecahedron().iter().map(|v| r * v).collect();
        let base = SolidGeometry::from_vertices(dodecahedron(), &GeomCfg::default());
        let moved = SolidGeometry::from_vertices(rotated, &GeomCfg::default());
        assert_eq!(moved.edges, base.edges);
    }
}

#[test]
fn degenerate_inputs_yield_no_edges() {
    assert!(edges_from_vertices(&[], 1e-6).is_empty());
    assert!(edges_from_vertices(&[vector![1.0, 0.0, 0.0]], 1e-6).is_empty());
    assert!(triangles_from_edges(0, &[]).is_empty());
}
