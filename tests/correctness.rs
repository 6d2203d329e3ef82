use num_traits::Zero;
use quadmat::{
    Error, MIN_DIM, SquareMatrix, add_parallel, add_parallel_with, add_sequential, mul_parallel,
    mul_parallel_with, mul_sequential,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fill(n: usize, seed: u64) -> SquareMatrix<i64> {
    let mut m = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            m.set(i, j, ((seed as usize * i * 31 + j * 7) % 19) as i64 - 9);
        }
    }
    m
}

fn random_matrix(n: usize, rng: &mut StdRng) -> SquareMatrix<i64> {
    let mut m = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            m.set(i, j, rng.gen_range(-100..=100));
        }
    }
    m
}

// ============================================================
// Worked examples
// ============================================================

#[test]
fn test_add_2x2_example() {
    let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
    let expected = SquareMatrix::from_rows(vec![vec![6, 8], vec![10, 12]]);

    assert_eq!(add_sequential(&a, &b).unwrap(), expected);
    assert_eq!(add_parallel(&a, &b).unwrap(), expected);
}

#[test]
fn test_mul_2x2_example() {
    let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
    let expected = SquareMatrix::from_rows(vec![vec![19, 22], vec![43, 50]]);

    assert_eq!(mul_sequential(&a, &b).unwrap(), expected);
    assert_eq!(mul_parallel(&a, &b).unwrap(), expected);
}

// ============================================================
// Parallel matches sequential, for every threshold
// ============================================================

#[test]
fn test_add_parallel_matches_sequential() {
    let sizes = [1, 2, 3, 4, 6, 7, 8, 16, 32];
    let thresholds = [0, 1, 2, 3, 4, 8, 64];

    for n in sizes {
        let a = fill(n, 3);
        let b = fill(n, 11);
        let expected = add_sequential(&a, &b).unwrap();

        for min_dim in thresholds {
            let actual = add_parallel_with(&a, &b, min_dim).unwrap();
            assert_eq!(actual, expected, "add size {n}, min_dim {min_dim}");
        }
    }
}

#[test]
fn test_mul_parallel_matches_sequential() {
    let sizes = [1, 2, 3, 4, 6, 7, 8, 16];
    let thresholds = [0, 1, 2, 3, 4, 8, 64];

    for n in sizes {
        let a = fill(n, 5);
        let b = fill(n, 13);
        let expected = mul_sequential(&a, &b).unwrap();

        for min_dim in thresholds {
            let actual = mul_parallel_with(&a, &b, min_dim).unwrap();
            assert_eq!(actual, expected, "mul size {n}, min_dim {min_dim}");
        }
    }
}

#[test]
fn test_parallel_matches_sequential_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for n in [8, 12, 16] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        assert_eq!(
            add_parallel_with(&a, &b, 4).unwrap(),
            add_sequential(&a, &b).unwrap(),
            "add size {n}"
        );
        assert_eq!(
            mul_parallel_with(&a, &b, 4).unwrap(),
            mul_sequential(&a, &b).unwrap(),
            "mul size {n}"
        );
    }
}

// ============================================================
// Threshold semantics
// ============================================================

#[test]
fn test_threshold_clamped_to_minimum() {
    assert_eq!(MIN_DIM, 2);

    let a = fill(8, 2);
    let b = fill(8, 9);
    let reference = add_parallel_with(&a, &b, MIN_DIM).unwrap();

    // Thresholds below the fixed minimum are raised, not rejected.
    assert_eq!(add_parallel_with(&a, &b, 0).unwrap(), reference);
    assert_eq!(add_parallel_with(&a, &b, 1).unwrap(), reference);
}

#[test]
fn test_small_dimensions_short_circuit() {
    // At or below the default threshold the parallel entry points run the
    // sequential kernel directly.
    for n in [1, 2] {
        let a = fill(n, 4);
        let b = fill(n, 6);
        assert_eq!(
            add_parallel(&a, &b).unwrap(),
            add_sequential(&a, &b).unwrap()
        );
        assert_eq!(
            mul_parallel(&a, &b).unwrap(),
            mul_sequential(&a, &b).unwrap()
        );
    }
}

// ============================================================
// Algebraic laws
// ============================================================

#[test]
fn test_add_commutative() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_matrix(8, &mut rng);
    let b = random_matrix(8, &mut rng);

    assert_eq!(
        add_parallel(&a, &b).unwrap(),
        add_parallel(&b, &a).unwrap()
    );
}

#[test]
fn test_add_associative() {
    let mut rng = StdRng::seed_from_u64(8);
    let a = random_matrix(8, &mut rng);
    let b = random_matrix(8, &mut rng);
    let c = random_matrix(8, &mut rng);

    let left = add_parallel(&add_parallel(&a, &b).unwrap(), &c).unwrap();
    let right = add_parallel(&a, &add_parallel(&b, &c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_mul_distributes_over_add() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = random_matrix(8, &mut rng);
    let b = random_matrix(8, &mut rng);
    let c = random_matrix(8, &mut rng);

    // A * (B + C) == A*B + A*C
    let left = mul_parallel(&a, &add_parallel(&b, &c).unwrap()).unwrap();
    let right = add_parallel(
        &mul_parallel(&a, &b).unwrap(),
        &mul_parallel(&a, &c).unwrap(),
    )
    .unwrap();
    assert_eq!(left, right);
}

// ============================================================
// Invalid arguments
// ============================================================

#[test]
fn test_dimension_mismatch_fails_all_operations() {
    let a: SquareMatrix<i64> = SquareMatrix::new(2);
    let b: SquareMatrix<i64> = SquareMatrix::new(4);

    assert!(matches!(
        add_sequential(&a, &b),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
    assert!(matches!(
        mul_sequential(&a, &b),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
    assert!(matches!(
        add_parallel(&a, &b),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
    assert!(matches!(
        mul_parallel(&a, &b),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
    assert!(matches!(
        add_parallel_with(&a, &b, 8),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
    assert!(matches!(
        mul_parallel_with(&a, &b, 8),
        Err(Error::DimensionMismatch { a: 2, b: 4 })
    ));
}

#[test]
fn test_dimension_mismatch_message_names_both_operands() {
    let a: SquareMatrix<i64> = SquareMatrix::new(2);
    let b: SquareMatrix<i64> = SquareMatrix::new(4);

    let err = add_sequential(&a, &b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "matrix dimension mismatch: A is 2x2, B is 4x4"
    );
}

// ============================================================
// Failure propagation
// ============================================================

/// Element whose multiplication panics, to simulate a worker dying
/// mid-computation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Volatile(i64);

impl std::ops::Add for Volatile {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Volatile(self.0 + rhs.0)
    }
}

impl std::ops::Mul for Volatile {
    type Output = Self;
    fn mul(self, _rhs: Self) -> Self {
        panic!("element multiplication failed");
    }
}

impl Zero for Volatile {
    fn zero() -> Self {
        Volatile(0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[test]
fn test_worker_panic_fails_whole_operation() {
    let a: SquareMatrix<Volatile> = SquareMatrix::new(4);
    let b: SquareMatrix<Volatile> = SquareMatrix::new(4);

    // Dimension 4 with threshold 2 forces the recursive path, so the panic
    // happens on a worker thread and must surface as an error rather than a
    // partial result.
    let err = mul_parallel_with(&a, &b, 2).unwrap_err();
    assert!(matches!(err, Error::WorkerPanicked { op: "mul" }));
}
