//! Criterion benchmarks for panel generation.
//!
//! Measures single-report generation per preset and batch throughput as the
//! number of identifiers grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fakelab_engine::batch::generate_batch;
use fakelab_engine::panel::generate;
use fakelab_engine::presets;

/// Benchmark generating one report for each built-in panel.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for panel in presets::all().unwrap() {
        group.bench_with_input(BenchmarkId::new("preset", panel.name()), &panel, |b, panel| {
            b.iter(|| generate(black_box(12345), panel, black_box(0.9)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark parallel batch generation.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");
    let panel = presets::basic_metabolic().unwrap();

    for size in [100u64, 1_000, 10_000] {
        let ids: Vec<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("reports", size), &ids, |b, ids| {
            b.iter(|| generate_batch(black_box(ids), &panel, 0.9).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_batch);
criterion_main!(benches);
