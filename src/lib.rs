//! # dokmat
//!
//! **Dictionary-of-keys sparse matrices with addition, subtraction, and
//! multiplication.**
//!
//! dokmat stores only the non-zero entries of a matrix, keyed by
//! coordinate, and provides the three binary algebraic operations over
//! that representation plus a triplet text format for loading matrices
//! from disk.
//!
//! ## Why dokmat?
//!
//! - **Memory-proportional to content**: O(nnz) storage, no dense-array
//!   footprint
//! - **Entry-driven arithmetic**: add, sub, and matmul iterate non-zero
//!   entries, not the full coordinate grid
//! - **Checked accessors**: out-of-range access is an error, not a silent
//!   zero
//! - **Generic over element type**: `i32`, `i64`, `f32`, `f64`
//!
//! ## Quick Start
//!
//! ```
//! use dokmat::prelude::*;
//!
//! let a = SparseMatrix::from_triplets(&[(0, 0, 1.0), (1, 1, 2.0)], [2, 2])?;
//! let b = SparseMatrix::from_triplets(&[(0, 0, 3.0), (0, 1, 4.0)], [2, 2])?;
//!
//! let sum = a.add(&b)?;
//! let product = a.matmul(&b)?;
//!
//! assert_eq!(sum.get(0, 0)?, 4.0);
//! assert_eq!(product.nnz(), 2);
//! # Ok::<(), dokmat::error::Error>(())
//! ```
//!
//! ## Loading from a triplet file
//!
//! ```no_run
//! use dokmat::io::{read_triplets_file, ReadOptions};
//! use dokmat::matrix::SparseMatrix;
//!
//! let m: SparseMatrix<f64> = read_triplets_file("matrix.txt", ReadOptions::default())?;
//! # Ok::<(), dokmat::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod io;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::io::{parse_triplets, read_triplets_file, ReadOptions};
    pub use crate::matrix::{Coord, SparseMatrix};
}
