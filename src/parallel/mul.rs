use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::matrix::square::{SquareMatrix, check_same_dimension};
use crate::parallel::add::add_parallel_with;
use crate::parallel::task::{ComputeTask, MIN_DIM, effective_min_dim};
use crate::sequential::mul::mul_sequential;

/// Parallel matrix multiplication with the default threshold ([`MIN_DIM`]).
///
/// See [`mul_parallel_with`].
pub fn mul_parallel<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    mul_parallel_with(a, b, MIN_DIM)
}

/// Parallel matrix multiplication with a caller-chosen subdivision threshold.
///
/// Thresholds below [`MIN_DIM`] are silently raised to it. Operands whose
/// dimension is at or below the effective threshold are multiplied
/// sequentially on the calling thread with no task spawned; larger operands
/// fan out into the eight block products of the 2×2 block formula, each on
/// its own thread, and the quadrant sums of the combine step reuse the
/// parallel adder at the same threshold. The threshold affects scheduling
/// only — the result is identical for every valid threshold.
///
/// # Errors
///
/// [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if the
/// operand dimensions differ (checked before any thread is created), or
/// [`Error::WorkerPanicked`](crate::Error::WorkerPanicked) if a subtask
/// panicked.
pub fn mul_parallel_with<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
    min_dim: usize,
) -> Result<SquareMatrix<T>> {
    check_same_dimension(a, b)?;

    let min_dim = effective_min_dim(min_dim);
    if a.dimension() <= min_dim {
        return mul_sequential(a, b);
    }

    debug!(dimension = a.dimension(), min_dim, "parallel mul");
    MulTask {
        a: a.clone(),
        b: b.clone(),
        min_dim,
    }
    .run()
}

/// Recursive multiplication task: eight children, one per block product.
struct MulTask<T> {
    a: SquareMatrix<T>,
    b: SquareMatrix<T>,
    min_dim: usize,
}

impl<T: Element> ComputeTask<T> for MulTask<T> {
    const OP: &'static str = "mul";

    fn dimension(&self) -> usize {
        self.a.dimension()
    }

    fn min_dim(&self) -> usize {
        self.min_dim
    }

    fn base_case(&self) -> Result<SquareMatrix<T>> {
        mul_sequential(&self.a, &self.b)
    }

    fn children(&self) -> Vec<Self> {
        // Slots 0-7: the eight products of the block formula
        //   C11 = A11*B11 + A12*B21    C12 = A11*B12 + A12*B22
        //   C21 = A21*B11 + A22*B21    C22 = A21*B12 + A22*B22
        [
            ((1, 1), (1, 1)),
            ((1, 1), (1, 2)),
            ((1, 2), (2, 1)),
            ((1, 2), (2, 2)),
            ((2, 1), (1, 1)),
            ((2, 1), (1, 2)),
            ((2, 2), (2, 1)),
            ((2, 2), (2, 2)),
        ]
        .into_iter()
        .map(|((ar, ac), (br, bc))| MulTask {
            a: self.a.quadrant(ar, ac),
            b: self.b.quadrant(br, bc),
            min_dim: self.min_dim,
        })
        .collect()
    }

    fn combine(&self, slots: Vec<SquareMatrix<T>>) -> Result<SquareMatrix<T>> {
        let [p0, p1, p2, p3, p4, p5, p6, p7] = match <[SquareMatrix<T>; 8]>::try_from(slots) {
            Ok(products) => products,
            Err(_) => unreachable!("multiplication fan-out is eight"),
        };

        // The quadrant sums go through the parallel adder, so the combine
        // step fans out onto further threads at the same threshold.
        let c11 = add_parallel_with(&p0, &p2, self.min_dim)?;
        let c12 = add_parallel_with(&p1, &p3, self.min_dim)?;
        let c21 = add_parallel_with(&p4, &p6, self.min_dim)?;
        let c22 = add_parallel_with(&p5, &p7, self.min_dim)?;

        Ok(SquareMatrix::from_quadrants(c11, c12, c21, c22))
    }
}
