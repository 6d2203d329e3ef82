//! Sequential baseline implementations.
//!
//! Straight nested-loop kernels over 1-indexed access. These serve two
//! roles: correctness baseline for the parallel versions, and the base case
//! the recursive decomposition bottoms out on.

pub mod add;
pub mod mul;
