//! Error types for dokmat

use thiserror::Error;

/// Result type alias using dokmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dokmat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes differ in an element-wise operation
    #[error("Dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Shape of the left operand, [nrows, ncols]
        expected: [usize; 2],
        /// Shape of the right operand, [nrows, ncols]
        got: [usize; 2],
    },

    /// Inner dimensions disagree in a matrix multiplication
    #[error(
        "Incompatible dimensions for multiplication: lhs has {lhs_cols} columns, rhs has {rhs_rows} rows"
    )]
    IncompatibleDimensions {
        /// Column count of the left operand
        lhs_cols: usize,
        /// Row count of the right operand
        rhs_rows: usize,
    },

    /// Coordinate outside the matrix bounds
    #[error("Coordinate ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    OutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        col: usize,
        /// Number of rows in the matrix
        nrows: usize,
        /// Number of columns in the matrix
        ncols: usize,
    },

    /// Malformed input in the triplet text format
    #[error("Parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number within the input
        line: usize,
        /// Reason the line was rejected
        reason: String,
    },

    /// Underlying I/O failure while reading a triplet file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a dimension mismatch error from two shapes
    pub fn dimension_mismatch(expected: [usize; 2], got: [usize; 2]) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create a parse error
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
