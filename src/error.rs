//! Error types for quadmat operations.

use thiserror::Error;

/// Errors surfaced by the public matrix operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The two operands of a binary operation have different dimensions.
    /// Raised before any work is dispatched.
    #[error("matrix dimension mismatch: A is {a}x{a}, B is {b}x{b}")]
    DimensionMismatch { a: usize, b: usize },

    /// A worker thread panicked while computing a subtask. The whole
    /// operation fails rather than returning a partially built matrix.
    #[error("worker thread panicked during parallel {op}")]
    WorkerPanicked { op: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
