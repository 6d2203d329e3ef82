//! Criterion benchmarks comparing the sequential and parallel kernels.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quadmat::{
    SquareMatrix, add_parallel_with, add_sequential, mul_parallel_with, mul_sequential,
};

fn fill(n: usize, seed: u64) -> SquareMatrix<f64> {
    let mut m = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            m.set(i, j, ((seed as usize * i + j) % 100) as f64);
        }
    }
    m
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for n in [64, 128, 256] {
        let a = fill(n, 3);
        let b = fill(n, 7);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, _| {
            bench.iter(|| add_sequential(&a, &b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |bench, _| {
            bench.iter(|| add_parallel_with(&a, &b, 32).unwrap())
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for n in [32, 64, 128] {
        let a = fill(n, 3);
        let b = fill(n, 7);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, _| {
            bench.iter(|| mul_sequential(&a, &b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |bench, _| {
            bench.iter(|| mul_parallel_with(&a, &b, 32).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_mul);
criterion_main!(benches);
