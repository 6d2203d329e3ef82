use crate::element::Element;
use crate::error::Result;
use crate::matrix::square::{SquareMatrix, check_same_dimension};

/// Sequential matrix multiplication: `C[i,j] = Σ_g A[i,g] * B[g,j]`.
///
/// Textbook triple loop accumulating into a zero-initialized result. Every
/// `(i, j, g)` triple is visited exactly once.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// the operand dimensions differ.
pub fn mul_sequential<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    check_same_dimension(a, b)?;

    let n = a.dimension();
    let mut c = SquareMatrix::new(n);
    for i in 1..=n {
        for j in 1..=n {
            for g in 1..=n {
                c.set(i, j, c.get(i, j) + a.get(i, g) * b.get(g, j));
            }
        }
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_mul_2x2() {
        let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
        let c = mul_sequential(&a, &b).unwrap();
        assert_eq!(c, SquareMatrix::from_rows(vec![vec![19, 22], vec![43, 50]]));
    }

    #[test]
    fn test_mul_identity() {
        let a = SquareMatrix::from_rows(vec![vec![2, 3, 5], vec![7, 11, 13], vec![17, 19, 23]]);
        let id = SquareMatrix::from_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(mul_sequential(&a, &id).unwrap(), a);
        assert_eq!(mul_sequential(&id, &a).unwrap(), a);
    }

    #[test]
    fn test_mul_by_zero_matrix() {
        let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let zero: SquareMatrix<i64> = SquareMatrix::new(2);
        assert_eq!(mul_sequential(&a, &zero).unwrap(), zero);
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a: SquareMatrix<i64> = SquareMatrix::new(2);
        let b: SquareMatrix<i64> = SquareMatrix::new(4);
        assert!(matches!(
            mul_sequential(&a, &b),
            Err(Error::DimensionMismatch { a: 2, b: 4 })
        ));
    }
}
