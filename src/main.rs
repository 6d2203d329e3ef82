//! Timing comparison for the sequential and parallel kernels.

use std::time::Instant;

use quadmat::{
    Error, SquareMatrix, add_parallel_with, add_sequential, mul_parallel_with, mul_sequential,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Quadrant-Recursive Matrix Arithmetic Benchmark ===\n");

    let sizes = [64, 128, 256];
    let thresholds = [16, 32, 64];
    let iterations = 3;

    for size in sizes {
        println!("Matrix: {size}×{size}");
        println!("{}", "-".repeat(50));

        let a = fill(size, 3);
        let b = fill(size, 7);

        let seq_add = bench(iterations, || add_sequential(&a, &b))?;
        println!("add sequential          {:8.3} ms", seq_add);
        for min_dim in thresholds {
            let t = bench(iterations, || add_parallel_with(&a, &b, min_dim))?;
            println!(
                "add parallel (min {min_dim:3}) {t:8.3} ms  ({:.1}×)",
                seq_add / t
            );
        }

        let seq_mul = bench(iterations, || mul_sequential(&a, &b))?;
        println!("mul sequential          {:8.3} ms", seq_mul);
        for min_dim in thresholds {
            let t = bench(iterations, || mul_parallel_with(&a, &b, min_dim))?;
            println!(
                "mul parallel (min {min_dim:3}) {t:8.3} ms  ({:.1}×)",
                seq_mul / t
            );
        }

        println!();
    }

    Ok(())
}

/// Deterministic test fill so runs are comparable.
fn fill(n: usize, seed: u64) -> SquareMatrix<f64> {
    let mut m = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            m.set(i, j, ((seed as usize * i + j) % 100) as f64);
        }
    }
    m
}

/// Average wall time of `f` in milliseconds, after one warmup run.
fn bench<F>(iterations: u32, f: F) -> Result<f64, Error>
where
    F: Fn() -> Result<SquareMatrix<f64>, Error>,
{
    f()?;

    let start = Instant::now();
    for _ in 0..iterations {
        f()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}
