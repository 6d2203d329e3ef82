//! Block-structured square matrix container.
//!
//! [`square::SquareMatrix`] is the data type all kernels operate on: a flat
//! row-major store with 1-indexed access, quadrant extraction for the
//! divide step, and quadrant assembly for the conquer step.

pub mod square;
