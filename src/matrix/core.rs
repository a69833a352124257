//! Core matrix implementation: coordinate key, struct, creation, accessors

use std::collections::HashMap;

use crate::element::Element;
use crate::error::{Error, Result};

/// Coordinate of a matrix cell
///
/// A value-typed key with structural equality and hashing over both
/// fields. Ordering is row-major (by row, then column), which gives
/// [`SparseMatrix::to_triplets`] its deterministic output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl Coord {
    /// Create a coordinate
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sparse matrix in DOK (dictionary-of-keys) format
///
/// Stores dimensions plus a map from [`Coord`] to non-zero values. The
/// dimensions are fixed at construction; only the entry map is mutable,
/// through [`set`](SparseMatrix::set).
///
/// # Invariants
///
/// - No stored value equals `T::zero()`; writing zero removes the entry.
/// - Every stored coordinate is within `[0, nrows) x [0, ncols)`.
///
/// Two matrices compare equal iff their dimensions and non-zero entry
/// sets are equal, regardless of insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: Element> {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) entries: HashMap<Coord, T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create a matrix from `(row, col, value)` triplets
    ///
    /// # Arguments
    ///
    /// * `triplets` - Entries to insert; later triplets overwrite earlier
    ///   ones at the same coordinate, and zero values erase
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any coordinate lies outside
    /// `shape`. Validation runs before any entry is stored.
    pub fn from_triplets(triplets: &[(usize, usize, T)], shape: [usize; 2]) -> Result<Self> {
        let [nrows, ncols] = shape;

        for &(row, col, _) in triplets {
            if row >= nrows || col >= ncols {
                return Err(Error::OutOfBounds {
                    row,
                    col,
                    nrows,
                    ncols,
                });
            }
        }

        let mut matrix = Self::new(nrows, ncols);
        for &(row, col, value) in triplets {
            matrix.insert_or_remove(Coord::new(row, col), value);
        }
        Ok(matrix)
    }

    /// Create an n x n matrix with ones on the diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.entries.insert(Coord::new(i, i), T::one());
        }
        matrix
    }

    /// Returns the stored value at a coordinate, or zero if absent
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self
            .entries
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or_else(T::zero))
    }

    /// Write a value at a coordinate
    ///
    /// A zero value removes any existing entry; a non-zero value inserts
    /// or overwrites. Dimensions are never altered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.insert_or_remove(Coord::new(row, col), value);
        Ok(())
    }

    /// Returns the number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the shape as [nrows, ncols]
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.nrows, self.ncols]
    }

    /// Returns the number of non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the matrix has no non-zero entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sparsity ratio (fraction of zeros)
    ///
    /// Sparsity = 1.0 - (nnz / total_elements)
    pub fn sparsity(&self) -> f64 {
        let total = (self.nrows * self.ncols) as f64;
        if total == 0.0 {
            0.0
        } else {
            1.0 - (self.nnz() as f64 / total)
        }
    }

    /// Returns the density ratio (fraction of non-zeros)
    #[inline]
    pub fn density(&self) -> f64 {
        1.0 - self.sparsity()
    }

    /// Iterate over the non-zero entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Collect the non-zero entries as triplets, sorted row-major
    pub fn to_triplets(&self) -> Vec<(usize, usize, T)> {
        let mut coords: Vec<Coord> = self.entries.keys().copied().collect();
        coords.sort_unstable();
        coords
            .into_iter()
            .map(|c| (c.row, c.col, self.entries[&c]))
            .collect()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(Error::OutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Unchecked write used by the checked paths; keeps the no-stored-zero
    /// invariant
    #[inline]
    pub(crate) fn insert_or_remove(&mut self, coord: Coord, value: T) {
        if value.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
    }
}
