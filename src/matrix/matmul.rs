//! Sparse matrix multiplication

use std::collections::HashMap;

use super::{Coord, SparseMatrix};
use crate::element::Element;
use crate::error::{Error, Result};

impl<T: Element> SparseMatrix<T> {
    /// Matrix multiplication: C = A * B
    ///
    /// A is m x n, B is n x p, the result is m x p with
    /// `C[i][j] = sum over k of A[i][k] * B[k][j]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDimensions`] when `A.ncols() !=
    /// B.nrows()`. The check runs before any result construction.
    ///
    /// # Algorithm
    ///
    /// Hash-accumulation over non-zero entries only: B's entries are
    /// indexed by row once, then each non-zero `A[i, k]` is multiplied
    /// against B's row `k`, accumulating into a map keyed by output
    /// coordinate. Zero sums are dropped, so exact cancellation leaves no
    /// entry behind. O(nnz_a * avg nnz per B row), instead of the dense
    /// m * n * p sweep.
    ///
    /// # Example
    ///
    /// ```
    /// use dokmat::matrix::SparseMatrix;
    ///
    /// let a = SparseMatrix::from_triplets(&[(0, 0, 1), (1, 1, 2)], [2, 2])?;
    /// let b = SparseMatrix::from_triplets(&[(0, 0, 3), (0, 1, 4)], [2, 2])?;
    ///
    /// let c = a.matmul(&b)?;
    /// assert_eq!(c.to_triplets(), vec![(0, 0, 3), (0, 1, 4)]);
    /// # Ok::<(), dokmat::error::Error>(())
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.ncols != other.nrows {
            return Err(Error::IncompatibleDimensions {
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
            });
        }

        // Index B's entries by row so each non-zero A[i, k] can scan the
        // matching row of B directly.
        let mut b_rows: Vec<Vec<(usize, T)>> = vec![Vec::new(); other.nrows];
        for (coord, value) in other.iter() {
            b_rows[coord.row].push((coord.col, value));
        }

        let mut accum: HashMap<Coord, T> = HashMap::new();
        for (a_coord, a_value) in self.iter() {
            for &(j, b_value) in &b_rows[a_coord.col] {
                let cell = accum
                    .entry(Coord::new(a_coord.row, j))
                    .or_insert_with(T::zero);
                *cell = *cell + a_value * b_value;
            }
        }

        let mut result = Self::new(self.nrows, other.ncols);
        for (coord, value) in accum {
            result.insert_or_remove(coord, value);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul() -> Result<()> {
        let a = SparseMatrix::from_triplets(&[(0, 0, 1), (1, 1, 2)], [2, 2])?;
        let b = SparseMatrix::from_triplets(&[(0, 0, 3), (0, 1, 4)], [2, 2])?;

        let c = a.matmul(&b)?;
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.to_triplets(), vec![(0, 0, 3), (0, 1, 4)]);
        assert_eq!(c.get(1, 0)?, 0);
        assert_eq!(c.get(1, 1)?, 0);
        Ok(())
    }

    #[test]
    fn test_matmul_identity() -> Result<()> {
        let a = SparseMatrix::from_triplets(&[(0, 2, 1.5), (1, 0, -2.0), (2, 1, 4.0)], [3, 3])?;
        let eye = SparseMatrix::<f64>::identity(3);

        assert_eq!(a.matmul(&eye)?, a);
        assert_eq!(eye.matmul(&a)?, a);
        Ok(())
    }

    #[test]
    fn test_matmul_rectangular() -> Result<()> {
        // [1 2 0]   [1 0]   [1 2]
        // [0 0 3] * [0 1] = [6 0]
        //           [2 0]
        let a = SparseMatrix::from_triplets(&[(0, 0, 1), (0, 1, 2), (1, 2, 3)], [2, 3])?;
        let b = SparseMatrix::from_triplets(&[(0, 0, 1), (1, 1, 1), (2, 0, 2)], [3, 2])?;

        let c = a.matmul(&b)?;
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.to_triplets(), vec![(0, 0, 1), (0, 1, 2), (1, 0, 6)]);
        Ok(())
    }

    #[test]
    fn test_matmul_cancellation_drops_entries() -> Result<()> {
        // Row [1, -1] against column [5, 5]: the dot product is exactly
        // zero, so the result must hold no entry at all.
        let a = SparseMatrix::from_triplets(&[(0, 0, 1), (0, 1, -1)], [1, 2])?;
        let b = SparseMatrix::from_triplets(&[(0, 0, 5), (1, 0, 5)], [2, 1])?;

        let c = a.matmul(&b)?;
        assert_eq!(c.shape(), [1, 1]);
        assert!(c.is_empty());
        Ok(())
    }

    #[test]
    fn test_matmul_incompatible_dimensions() {
        let a = SparseMatrix::<i32>::new(2, 3);
        let b = SparseMatrix::<i32>::new(2, 2);
        assert!(matches!(
            a.matmul(&b),
            Err(Error::IncompatibleDimensions {
                lhs_cols: 3,
                rhs_rows: 2
            })
        ));
    }
}
