//! Quadrant-recursive parallel implementations.
//!
//! Each operand is split into its four quadrants and the pieces are computed
//! on freshly spawned threads, recursively, until the dimension reaches the
//! subdivision threshold and the sequential kernels take over. A parent
//! joins all of its children before reading any of their results, and a
//! failing child fails the whole operation.
//!
//! Available entry points:
//! - [`add::add_parallel`] / [`add::add_parallel_with`]: 4-way fan-out
//! - [`mul::mul_parallel`] / [`mul::mul_parallel_with`]: 8-way fan-out plus
//!   nested parallel additions in the combine step

pub mod add;
pub mod mul;
mod task;

pub use task::MIN_DIM;
