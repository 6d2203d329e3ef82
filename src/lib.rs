//! Recursive quadrant-based parallel square-matrix arithmetic.
//!
//! Large dense additions and multiplications are decomposed into independent
//! quadrant subtasks that run concurrently, one thread per subtask, until
//! the operand dimension drops to a configurable threshold and the plain
//! nested-loop kernels take over. Multiplication uses the 2×2 block formula:
//! eight block products computed in parallel, combined by four parallel
//! additions.
//!
//! ## Usage
//!
//! ```
//! use quadmat::{SquareMatrix, add_parallel, mul_parallel};
//!
//! let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//!
//! let sum = add_parallel(&a, &b)?;
//! assert_eq!(sum, SquareMatrix::from_rows(vec![vec![6, 8], vec![10, 12]]));
//!
//! let product = mul_parallel(&a, &b)?;
//! assert_eq!(product, SquareMatrix::from_rows(vec![vec![19, 22], vec![43, 50]]));
//! # Ok::<(), quadmat::Error>(())
//! ```
//!
//! Raising the threshold trades parallelism for lower thread overhead
//! without changing the result:
//!
//! ```
//! use quadmat::{SquareMatrix, mul_parallel_with, mul_sequential};
//!
//! let a: SquareMatrix<i64> = SquareMatrix::new(8);
//! let b: SquareMatrix<i64> = SquareMatrix::new(8);
//!
//! assert_eq!(mul_parallel_with(&a, &b, 4)?, mul_sequential(&a, &b)?);
//! # Ok::<(), quadmat::Error>(())
//! ```
//!
//! ## What's inside
//!
//! - [`SquareMatrix`]: 1-indexed square container with quadrant
//!   extraction and quadrant assembly
//! - [`add_sequential`] / [`mul_sequential`]: nested-loop baselines
//! - [`add_parallel`] / [`mul_parallel`]: divide-and-conquer over scoped
//!   threads, joined before any result is read
//!
//! Elements are generic over [`Element`], a semiring bound satisfied by all
//! primitive numeric types.

pub mod element;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod sequential;

pub use element::Element;
pub use error::{Error, Result};
pub use matrix::square::SquareMatrix;
pub use parallel::MIN_DIM;
pub use parallel::add::{add_parallel, add_parallel_with};
pub use parallel::mul::{mul_parallel, mul_parallel_with};
pub use sequential::add::add_sequential;
pub use sequential::mul::mul_sequential;
