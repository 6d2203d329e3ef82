use crate::element::Element;
use crate::error::{Error, Result};

/// Square matrix over an [`Element`] type, stored row-major.
///
/// Access is **1-indexed**: valid row and column indices run from 1 through
/// [`dimension`](SquareMatrix::dimension) inclusive. The recursive kernels
/// split a matrix into its four quadrants with [`quadrant`](SquareMatrix::quadrant)
/// and rebuild results with [`from_quadrants`](SquareMatrix::from_quadrants).
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    dimension: usize,
    data: Vec<T>,
}

impl<T: Element> SquareMatrix<T> {
    /// Create an `n×n` matrix filled with the element type's zero value.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "matrix dimension must be positive");
        SquareMatrix {
            dimension,
            data: vec![T::zero(); dimension * dimension],
        }
    }

    /// Build a matrix from nested row vectors.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or any row's length differs from the number
    /// of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let dimension = rows.len();
        let mut m = SquareMatrix::new(dimension);
        for (i, row) in rows.into_iter().enumerate() {
            assert_eq!(
                row.len(),
                dimension,
                "row {} has length {}, expected {}",
                i + 1,
                row.len(),
                dimension
            );
            for (j, value) in row.into_iter().enumerate() {
                m.set(i + 1, j + 1, value);
            }
        }
        m
    }

    /// Assemble a matrix from four equal-dimension quadrants.
    ///
    /// The result has dimension `2 × quadrant_dimension`; reads at `(i, j)`
    /// route to the matching quadrant at the correspondingly shifted local
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if the four quadrant dimensions differ.
    pub fn from_quadrants(
        q11: SquareMatrix<T>,
        q12: SquareMatrix<T>,
        q21: SquareMatrix<T>,
        q22: SquareMatrix<T>,
    ) -> Self {
        let half = q11.dimension;
        assert!(
            q12.dimension == half && q21.dimension == half && q22.dimension == half,
            "quadrant dimensions differ: {}x{}, {}x{}, {}x{}, {}x{}",
            q11.dimension,
            q11.dimension,
            q12.dimension,
            q12.dimension,
            q21.dimension,
            q21.dimension,
            q22.dimension,
            q22.dimension
        );

        let mut m = SquareMatrix::new(2 * half);
        for i in 1..=half {
            for j in 1..=half {
                m.set(i, j, q11.get(i, j));
                m.set(i, j + half, q12.get(i, j));
                m.set(i + half, j, q21.get(i, j));
                m.set(i + half, j + half, q22.get(i, j));
            }
        }
        m
    }

    /// Edge length of the matrix. Constant for the value's lifetime.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Read the element at 1-indexed position `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` falls outside `[1, dimension]`.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.index(i, j)]
    }

    /// Write the element at 1-indexed position `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` falls outside `[1, dimension]`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    /// Extract one quadrant as an owned half-dimension matrix.
    ///
    /// `(1,1)` is top-left, `(1,2)` top-right, `(2,1)` bottom-left and
    /// `(2,2)` bottom-right. Extraction copies, so sibling quadrants never
    /// alias each other or the source.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is outside `{1, 2}`, or if the dimension is odd
    /// and therefore cannot be split into equal quadrants.
    pub fn quadrant(&self, r: usize, c: usize) -> SquareMatrix<T> {
        assert!(
            (1..=2).contains(&r) && (1..=2).contains(&c),
            "quadrant index ({r}, {c}) out of range, expected 1 or 2 per axis"
        );
        assert!(
            self.dimension % 2 == 0,
            "cannot split a matrix of odd dimension {}",
            self.dimension
        );

        let half = self.dimension / 2;
        let row_off = (r - 1) * half;
        let col_off = (c - 1) * half;

        let mut q = SquareMatrix::new(half);
        for i in 1..=half {
            for j in 1..=half {
                q.set(i, j, self.get(i + row_off, j + col_off));
            }
        }
        q
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i >= 1 && i <= self.dimension,
            "row index {} out of range [1, {}]",
            i,
            self.dimension
        );
        assert!(
            j >= 1 && j <= self.dimension,
            "column index {} out of range [1, {}]",
            j,
            self.dimension
        );
        (i - 1) * self.dimension + (j - 1)
    }
}

/// Check the precondition shared by every binary operation.
pub(crate) fn check_same_dimension<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<()> {
    if a.dimension() != b.dimension() {
        return Err(Error::DimensionMismatch {
            a: a.dimension(),
            b: b.dimension(),
        });
    }
    Ok(())
}
