//! Shared recursion skeleton for the parallel compute tasks.

use std::thread;

use tracing::trace;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::square::SquareMatrix;

/// Smallest subdivision threshold the parallel entry points will use.
/// Caller-supplied thresholds below this are raised to it, never rejected.
pub const MIN_DIM: usize = 2;

/// Clamp a caller-supplied threshold up to [`MIN_DIM`].
pub(crate) fn effective_min_dim(min_dim: usize) -> usize {
    min_dim.max(MIN_DIM)
}

/// One unit of recursive divide-and-conquer work.
///
/// A task owns its two operands and the subdivision threshold. The provided
/// [`run`](ComputeTask::run) drives the recursion: operands at or below the
/// threshold are handled by the sequential base case, larger ones are split
/// into quadrant subtasks executed on their own threads. Children are joined
/// in slot order before any result is read.
pub(crate) trait ComputeTask<T: Element>: Send + Sized {
    /// Operation name carried in trace events and panic errors.
    const OP: &'static str;

    fn dimension(&self) -> usize;

    fn min_dim(&self) -> usize;

    /// Sequential computation for operands that are not worth splitting.
    fn base_case(&self) -> Result<SquareMatrix<T>>;

    /// Child tasks in slot order. Called only for even dimensions above the
    /// threshold.
    fn children(&self) -> Vec<Self>;

    /// Combine the slot results, in the order [`children`](ComputeTask::children)
    /// produced them, into this task's own result.
    fn combine(&self, slots: Vec<SquareMatrix<T>>) -> Result<SquareMatrix<T>>;

    /// Execute the task to completion, blocking until every transitively
    /// spawned child has finished.
    ///
    /// An odd dimension cannot be split into equal quadrants, so such a task
    /// finishes sequentially at this node; every split halves an even
    /// dimension, which guarantees termination.
    fn run(&self) -> Result<SquareMatrix<T>> {
        if self.dimension() <= self.min_dim() || self.dimension() % 2 != 0 {
            return self.base_case();
        }

        let children = self.children();
        trace!(
            op = Self::OP,
            dimension = self.dimension(),
            fan_out = children.len(),
            "splitting task"
        );

        thread::scope(|scope| {
            let handles: Vec<_> = children
                .into_iter()
                .map(|child| scope.spawn(move || child.run()))
                .collect();

            // Join in slot order; no slot is read before its writer has
            // finished. Every handle is joined before the first failure is
            // propagated, so the scope never re-raises a sibling's panic.
            let mut slots = Vec::with_capacity(handles.len());
            let mut first_err = None;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(slot)) => slots.push(slot),
                    Ok(Err(err)) => {
                        first_err.get_or_insert(err);
                    }
                    Err(_) => {
                        first_err.get_or_insert(Error::WorkerPanicked { op: Self::OP });
                    }
                }
            }

            match first_err {
                Some(err) => Err(err),
                None => self.combine(slots),
            }
        })
    }
}
