//! Criterion micro-benchmarks for bounds operations.

use criterion::{criterion_group, criterion_main, Criterion};
use judo_bench::{reference_workload, stress_workload};
use std::hint::black_box;

/// Benchmark: clip 10K x 32 points.
fn bench_clip_10k(c: &mut Criterion) {
    let w = reference_workload(42);
    c.bench_function("clip_10k", |b| {
        b.iter(|| black_box(w.bounds.clip(&w.points).unwrap()));
    });
}

/// Benchmark: two-pass periodic wrap over 10K x 32 points.
fn bench_pbc_10k(c: &mut Criterion) {
    let w = reference_workload(42);
    c.bench_function("pbc_10k", |b| {
        b.iter(|| black_box(w.bounds.pbc(&w.points).unwrap()));
    });
}

/// Benchmark: per-row containment over 10K x 32 points.
fn bench_contains_10k(c: &mut Criterion) {
    let w = reference_workload(42);
    c.bench_function("contains_10k", |b| {
        b.iter(|| black_box(w.bounds.contains(&w.points).unwrap()));
    });
}

/// Benchmark: per-row containment over 100K x 32 points.
fn bench_contains_100k(c: &mut Criterion) {
    let w = stress_workload(42);
    c.bench_function("contains_100k", |b| {
        b.iter(|| black_box(w.bounds.contains(&w.points).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_clip_10k,
    bench_pbc_10k,
    bench_contains_10k,
    bench_contains_100k
);
criterion_main!(benches);
