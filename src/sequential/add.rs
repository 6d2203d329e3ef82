use crate::element::Element;
use crate::error::Result;
use crate::matrix::square::{SquareMatrix, check_same_dimension};

/// Sequential matrix addition: `C[i,j] = A[i,j] + B[i,j]`.
///
/// Pure element-wise double loop, no shared mutable state.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// the operand dimensions differ.
pub fn add_sequential<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    check_same_dimension(a, b)?;

    let n = a.dimension();
    let mut c = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            c.set(i, j, a.get(i, j) + b.get(i, j));
        }
    }
    Ok(c)
}
