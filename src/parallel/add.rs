use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::matrix::square::{SquareMatrix, check_same_dimension};
use crate::parallel::task::{ComputeTask, MIN_DIM, effective_min_dim};
use crate::sequential::add::add_sequential;

/// Parallel matrix addition with the default threshold ([`MIN_DIM`]).
///
/// See [`add_parallel_with`].
pub fn add_parallel<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    add_parallel_with(a, b, MIN_DIM)
}

/// Parallel matrix addition with a caller-chosen subdivision threshold.
///
/// Thresholds below [`MIN_DIM`] are silently raised to it. Operands whose
/// dimension is at or below the effective threshold are added sequentially
/// on the calling thread with no task spawned; larger operands are split
/// into four quadrant pairs computed on their own threads, recursively. The
/// threshold affects scheduling only — the result is identical for every
/// valid threshold.
///
/// # Errors
///
/// [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if the
/// operand dimensions differ (checked before any thread is created), or
/// [`Error::WorkerPanicked`](crate::Error::WorkerPanicked) if a subtask
/// panicked.
pub fn add_parallel_with<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
    min_dim: usize,
) -> Result<SquareMatrix<T>> {
    check_same_dimension(a, b)?;

    let min_dim = effective_min_dim(min_dim);
    if a.dimension() <= min_dim {
        return add_sequential(a, b);
    }

    debug!(dimension = a.dimension(), min_dim, "parallel add");
    AddTask {
        a: a.clone(),
        b: b.clone(),
        min_dim,
    }
    .run()
}

/// Recursive addition task: four children, one per quadrant pair.
struct AddTask<T> {
    a: SquareMatrix<T>,
    b: SquareMatrix<T>,
    min_dim: usize,
}

impl<T: Element> ComputeTask<T> for AddTask<T> {
    const OP: &'static str = "add";

    fn dimension(&self) -> usize {
        self.a.dimension()
    }

    fn min_dim(&self) -> usize {
        self.min_dim
    }

    fn base_case(&self) -> Result<SquareMatrix<T>> {
        add_sequential(&self.a, &self.b)
    }

    fn children(&self) -> Vec<Self> {
        // Slots 0-3: quadrant pairs in row-major order.
        [(1, 1), (1, 2), (2, 1), (2, 2)]
            .into_iter()
            .map(|(r, c)| AddTask {
                a: self.a.quadrant(r, c),
                b: self.b.quadrant(r, c),
                min_dim: self.min_dim,
            })
            .collect()
    }

    fn combine(&self, slots: Vec<SquareMatrix<T>>) -> Result<SquareMatrix<T>> {
        let [q11, q12, q21, q22] = match <[SquareMatrix<T>; 4]>::try_from(slots) {
            Ok(quadrants) => quadrants,
            Err(_) => unreachable!("addition fan-out is four"),
        };
        Ok(SquareMatrix::from_quadrants(q11, q12, q21, q22))
    }
}
