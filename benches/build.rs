//! Constellation building benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qam_constellation::*;

fn benchmark_build_square(c: &mut Criterion) {
    c.bench_function("build_qam256", |b| {
        b.iter(|| black_box(build_constellation(black_box(256))))
    });
}

fn benchmark_build_cross(c: &mut Criterion) {
    c.bench_function("build_qam2048_cross", |b| {
        b.iter(|| black_box(build_constellation(black_box(2048))))
    });
}

fn benchmark_analyze_all(c: &mut Criterion) {
    let (constellation, _) = build_constellation(1024).unwrap();
    let indices: Vec<usize> = (0..constellation.len()).collect();

    c.bench_function("analyze_qam1024_all_points", |b| {
        b.iter(|| black_box(analyze_points(&constellation, &indices)))
    });
}

criterion_group!(benches, benchmark_build_square, benchmark_build_cross, benchmark_analyze_all);
criterion_main!(benches);
