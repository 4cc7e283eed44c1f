//! Criterion microbenches for geometry extraction and group construction.
//!
//! - Edge and triangle extraction from the static vertex tables.
//! - Generator closure for the tetrahedral, octahedral and icosahedral groups.
//! - Edge action of a whole group.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use platonic::geom3::{GeomCfg, SolidGeometry};
use platonic::solid::{Solid, SolidData};
use platonic::symmetry::RotationGroup;
use std::hint::black_box;

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let cfg = GeomCfg::default();
    for solid in Solid::ALL {
        let vertices = solid.vertices();
        group.bench_function(BenchmarkId::new("from_vertices", solid.short_name()), |b| {
            b.iter(|| SolidGeometry::from_vertices(black_box(vertices.clone()), &cfg))
        });
    }
    group.finish();
}

fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");
    let cfg = GeomCfg::default();
    for solid in [Solid::Tetrahedron, Solid::Octahedron, Solid::Icosahedron] {
        let vertices = solid.vertices();
        group.bench_function(BenchmarkId::new("close_checked", solid.short_name()), |b| {
            b.iter(|| RotationGroup::close_checked(black_box(&vertices), solid.symmetry(), &cfg))
        });
    }
    group.finish();
}

fn bench_edge_action(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_action");
    for solid in [Solid::Cube, Solid::Dodecahedron] {
        let data = SolidData::build(solid, &GeomCfg::default()).unwrap();
        group.bench_function(BenchmarkId::new("edge_permutations", solid.short_name()), |b| {
            b.iter(|| black_box(&data).edge_permutations())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_closure, bench_edge_action);
criterion_main!(benches);
