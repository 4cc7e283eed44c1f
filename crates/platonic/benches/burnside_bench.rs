//! Criterion benches for the counting hot path.
//!
//! - Subset classification on random masks (connectivity flood, triangles).
//! - Gray-order cycle-union enumeration.
//! - Full orbit counts for the small solids, sequential and batched.
//!
//! The 30-edge solids are left out; one run takes minutes.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use platonic::burnside::{cycle_masks, CountCfg, CycleUnions, NoopObserver, SubsetClassifier};
use platonic::geom3::GeomCfg;
use platonic::solid::{Solid, SolidData};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for solid in [Solid::Octahedron, Solid::Icosahedron, Solid::Dodecahedron] {
        let data = SolidData::build(solid, &GeomCfg::default()).unwrap();
        let classifier =
            SubsetClassifier::new(&data.geometry.edges, &data.geometry.triangles).unwrap();
        let full = (1u64 << data.geometry.edge_count()) - 1;
        let mut rng = StdRng::seed_from_u64(2024);
        group.bench_function(BenchmarkId::new("classify", solid.short_name()), |b| {
            b.iter_batched(
                || rng.gen::<u64>() & full,
                |mask| classifier.classify(mask),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("unions");
    let data = SolidData::build(Solid::Icosahedron, &GeomCfg::default()).unwrap();
    let perms = data.edge_permutations().unwrap();
    // a half-turn: 16 edge cycles, 65536 unions
    let half_turn = perms
        .iter()
        .find(|p| p.cycles().len() == 16)
        .map(cycle_masks)
        .unwrap();
    group.bench_function("gray_16_cycles", |b| {
        b.iter(|| CycleUnions::new(black_box(&half_turn)).fold(0u64, |acc, m| acc ^ m))
    });
    group.finish();
}

fn bench_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("counts");
    group.sample_size(20);
    for solid in [Solid::Tetrahedron, Solid::Cube, Solid::Octahedron] {
        let data = SolidData::build(solid, &GeomCfg::default()).unwrap();
        for (label, cfg) in [
            (
                "sequential",
                CountCfg {
                    parallel: false,
                    ..CountCfg::default()
                },
            ),
            (
                "batched",
                CountCfg {
                    batch_bits: 4,
                    ..CountCfg::default()
                },
            ),
        ] {
            group.bench_function(BenchmarkId::new(label, solid.short_name()), |b| {
                b.iter(|| data.count(&cfg, &NoopObserver, None))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_unions, bench_counts);
criterion_main!(benches);
