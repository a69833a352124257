//! Sparse matrix storage and arithmetic
//!
//! The matrix is stored in DOK (dictionary-of-keys) layout: a hash map from
//! `(row, col)` coordinates to non-zero values. DOK is the natural format
//! for incremental construction and random-access mutation, which is what
//! the triplet construction path and the `set` primitive need. O(nnz)
//! storage.
//!
//! # Usage
//!
//! ```
//! use dokmat::matrix::SparseMatrix;
//!
//! let mut a = SparseMatrix::<f64>::new(2, 2);
//! a.set(0, 0, 1.0)?;
//! a.set(1, 1, 2.0)?;
//!
//! let b = SparseMatrix::from_triplets(&[(0, 0, 3.0), (0, 1, 4.0)], [2, 2])?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum.get(0, 0)?, 4.0);
//!
//! let product = a.matmul(&b)?;
//! assert_eq!(product.get(0, 1)?, 4.0);
//! # Ok::<(), dokmat::error::Error>(())
//! ```
//!
//! Zero results are never stored: writing the additive identity to a cell
//! removes its entry, so arithmetic results stay sparse without any
//! post-processing pass.

mod core;
mod elementwise;
mod matmul;

pub use core::{Coord, SparseMatrix};
