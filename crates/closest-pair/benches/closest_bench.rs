//! Criterion benchmarks for the closest-pair solvers.
//! Focus sizes: n in {100, 1000, 10000} (brute force up to 1000 only).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p closest-pair

use closest_pair::api::{
    brute_force, divide_and_conquer, divide_and_conquer_with, unique_points, CloudCfg, SolveCfg,
    StripScan,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[100usize, 1_000, 10_000] {
        let pts = unique_points(n, CloudCfg::default(), 42).unwrap();
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &pts, |b, pts| {
                b.iter(|| brute_force(black_box(pts)))
            });
        }
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &pts, |b, pts| {
            b.iter(|| divide_and_conquer(black_box(pts)))
        });
    }
    group.finish();
}

// Ablation: strip neighbor cap on vs off. Distances agree; only cost differs.
fn bench_strip_cap(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_cap");
    let pts = unique_points(10_000, CloudCfg::default(), 7).unwrap();
    for (label, strip) in [
        ("capped15", StripScan::Capped(15)),
        ("capped7", StripScan::Capped(7)),
        ("uncapped", StripScan::Uncapped),
    ] {
        let cfg = SolveCfg { strip };
        group.bench_function(BenchmarkId::new("divide_and_conquer", label), |b| {
            b.iter(|| divide_and_conquer_with(black_box(&pts), cfg))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers, bench_strip_cap);
criterion_main!(benches);
