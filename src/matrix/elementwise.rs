//! Element-wise operations: add, sub
//!
//! Both operations are a union merge over the operands' entry sets. A cell
//! missing from one operand contributes the additive identity, and cells
//! that combine to zero are dropped from the result, so the output holds
//! the no-stored-zero invariant without a separate compaction pass.

use super::SparseMatrix;
use crate::element::Element;
use crate::error::{Error, Result};

impl<T: Element> SparseMatrix<T> {
    /// Element-wise addition: C = A + B
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the shapes differ. The
    /// check runs before any result construction.
    ///
    /// # Algorithm
    ///
    /// Entry-driven union merge, O(nnz_a + nnz_b). Equivalent to summing
    /// every cell of the full grid with absent cells read as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dokmat::matrix::SparseMatrix;
    ///
    /// let a = SparseMatrix::from_triplets(&[(0, 0, 1), (1, 1, 2)], [2, 2])?;
    /// let b = SparseMatrix::from_triplets(&[(0, 0, 3), (0, 1, 4)], [2, 2])?;
    ///
    /// let c = a.add(&b)?;
    /// assert_eq!(c.to_triplets(), vec![(0, 0, 4), (0, 1, 4), (1, 1, 2)]);
    /// # Ok::<(), dokmat::error::Error>(())
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.merge(other, |a, b| a + b)
    }

    /// Element-wise subtraction: C = A - B
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the shapes differ. The
    /// check runs before any result construction.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.merge(other, |a, b| a - b)
    }

    /// Shared union-merge kernel for add and sub
    ///
    /// `combine` receives (lhs cell, rhs cell) with absent cells read as
    /// zero; it must satisfy `combine(x, 0) == x` so cells present only in
    /// `self` can be carried over untouched.
    fn merge(&self, other: &Self, combine: impl Fn(T, T) -> T) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(self.shape(), other.shape()));
        }

        let mut result = Self {
            nrows: self.nrows,
            ncols: self.ncols,
            entries: self.entries.clone(),
        };

        for (coord, rhs) in other.iter() {
            let lhs = result.entries.get(&coord).copied().unwrap_or_else(T::zero);
            result.insert_or_remove(coord, combine(lhs, rhs));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_a() -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(&[(0, 0, 1), (1, 1, 2)], [2, 2]).unwrap()
    }

    fn fixture_b() -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(&[(0, 0, 3), (0, 1, 4)], [2, 2]).unwrap()
    }

    #[test]
    fn test_add() -> Result<()> {
        let c = fixture_a().add(&fixture_b())?;
        assert_eq!(c.to_triplets(), vec![(0, 0, 4), (0, 1, 4), (1, 1, 2)]);
        Ok(())
    }

    #[test]
    fn test_add_commutes() -> Result<()> {
        let (a, b) = (fixture_a(), fixture_b());
        assert_eq!(a.add(&b)?, b.add(&a)?);
        Ok(())
    }

    #[test]
    fn test_sub_inverts_add() -> Result<()> {
        let (a, b) = (fixture_a(), fixture_b());
        assert_eq!(a.add(&b)?.sub(&b)?, a);
        Ok(())
    }

    #[test]
    fn test_cancellation_drops_entries() -> Result<()> {
        let a = fixture_a();
        let diff = a.sub(&a)?;
        assert!(diff.is_empty());
        assert_eq!(diff.shape(), [2, 2]);
        Ok(())
    }

    #[test]
    fn test_operands_not_mutated() -> Result<()> {
        let (a, b) = (fixture_a(), fixture_b());
        let _ = a.add(&b)?;
        assert_eq!(a, fixture_a());
        assert_eq!(b, fixture_b());
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() {
        let a = fixture_a();
        let b = SparseMatrix::<i64>::new(2, 3);
        assert!(matches!(a.add(&b), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(a.sub(&b), Err(Error::DimensionMismatch { .. })));
    }
}
