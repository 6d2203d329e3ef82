//! Scalar bounds for matrix elements.

use num_traits::Zero;

/// Shared trait bounds for types usable as matrix elements.
///
/// The arithmetic forms a semiring: `+` and `*` must be total and free of
/// side effects. [`Zero`] supplies both the fill value for freshly
/// constructed matrices and the accumulator seed for multiplication.
/// `Send + Sync` lets elements cross thread boundaries during the recursive
/// decomposition.
///
/// All primitive numeric types qualify; custom semiring types qualify by
/// implementing the operator traits.
pub trait Element:
    Copy
    + Send
    + Sync
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + Zero
    + PartialEq
{
}

impl<T> Element for T where
    T: Copy
        + Send
        + Sync
        + std::ops::Add<Output = T>
        + std::ops::Mul<Output = T>
        + Zero
        + PartialEq
{
}
