use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdsplit::sampling::{random_points_2d, random_points_3d};
use kdsplit::{KdConfig, KdTree};

const SIZES: [usize; 5] = [100, 1000, 10_000, 100_000, 1_000_000];

fn benchmark_build_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_2d");
    group.sample_size(10);

    for &size in &SIZES {
        let points = random_points_2d(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| KdTree::from_points(black_box(&points[..]), KdConfig::default()));
        });
    }
    group.finish();
}

fn benchmark_build_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_3d");
    group.sample_size(10);

    for &size in &SIZES {
        let points = random_points_3d(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| KdTree::from_points(black_box(&points[..]), KdConfig::default()));
        });
    }
    group.finish();
}

fn benchmark_build_sorted(c: &mut Criterion) {
    // Points along a diagonal, already sorted on every axis
    let size = 100_000;
    let points: Vec<[f64; 3]> = (0..size)
        .map(|i| {
            let v = i as f64 / size as f64;
            [v, v, v]
        })
        .collect();

    c.bench_function(&format!("build_sorted_{}_points", size), |b| {
        b.iter(|| KdTree::from_points(black_box(&points[..]), KdConfig::default()));
    });
}

criterion_group!(benches, benchmark_build_2d, benchmark_build_3d, benchmark_build_sorted);
criterion_main!(benches);
