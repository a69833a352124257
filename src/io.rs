//! Triplet text format reader
//!
//! The construction path consumes a plain-text format: two header lines
//! carrying the dimensions, then one parenthesized triplet per line.
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! Blank lines are ignored and duplicate coordinates resolve last-wins.
//! By default the reader is lenient: a body line that does not parse into
//! exactly three numeric tokens, or whose coordinate falls outside the
//! declared dimensions, is skipped. [`ReadOptions::strict`] turns both
//! cases into errors. The header lines are mandatory in either mode;
//! without dimensions there is no matrix to build.

use std::fs;
use std::path::Path;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Options controlling triplet parsing
///
/// The default is the lenient historical behavior; construct with
/// [`ReadOptions::strict`] to reject bad body lines instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Fail on malformed or out-of-range body lines instead of skipping them
    pub strict: bool,
}

impl ReadOptions {
    /// Lenient parsing: skip malformed and out-of-range body lines
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict parsing: malformed body lines raise [`Error::Parse`],
    /// out-of-range coordinates raise [`Error::OutOfBounds`]
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Parse a matrix from triplet text
///
/// # Errors
///
/// Returns [`Error::Parse`] when either header line is missing or
/// malformed, and in strict mode for malformed body lines.
/// Returns [`Error::OutOfBounds`] in strict mode for triplets outside the
/// declared dimensions.
pub fn parse_triplets<T: Element>(input: &str, options: ReadOptions) -> Result<SparseMatrix<T>> {
    let mut lines = input.lines().enumerate();

    let nrows = header_value(lines.next(), 1, "rows")?;
    let ncols = header_value(lines.next(), 2, "cols")?;

    let mut matrix = SparseMatrix::new(nrows, ncols);
    for (idx, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_triplet_line::<T>(line) {
            Some((row, col, value)) => match matrix.set(row, col, value) {
                Ok(()) => {}
                Err(err @ Error::OutOfBounds { .. }) => {
                    if options.strict {
                        return Err(err);
                    }
                }
                Err(err) => return Err(err),
            },
            None => {
                if options.strict {
                    return Err(Error::parse(
                        idx + 1,
                        format!("expected '(row, col, value)', got '{line}'"),
                    ));
                }
            }
        }
    }

    Ok(matrix)
}

/// Read a matrix from a triplet file on disk
///
/// Reads the whole file, then parses it with [`parse_triplets`].
pub fn read_triplets_file<T: Element>(
    path: impl AsRef<Path>,
    options: ReadOptions,
) -> Result<SparseMatrix<T>> {
    let contents = fs::read_to_string(path)?;
    parse_triplets(&contents, options)
}

/// Extract the integer from a `key=<integer>` header line
fn header_value(line: Option<(usize, &str)>, line_no: usize, key: &str) -> Result<usize> {
    let (_, raw) = line.ok_or_else(|| Error::parse(line_no, format!("missing '{key}=' header")))?;
    let trimmed = raw.trim();
    let value = trimmed
        .strip_prefix(key)
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(|| {
            Error::parse(line_no, format!("expected '{key}=<integer>', got '{trimmed}'"))
        })?;
    let value = value.trim();
    value
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid {key} count '{value}'")))
}

/// Parse one `(row, col, value)` body line; `None` means malformed
fn parse_triplet_line<T: Element>(line: &str) -> Option<(usize, usize, T)> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?;
    let mut tokens = inner.split(',').map(str::trim);
    let row = tokens.next()?.parse().ok()?;
    let col = tokens.next()?.parse().ok()?;
    let value = T::parse(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((row, col, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_spacing_tolerated() -> Result<()> {
        let m: SparseMatrix<i64> = parse_triplets("rows = 2\ncols= 3\n", ReadOptions::default())?;
        assert_eq!(m.shape(), [2, 3]);
        Ok(())
    }

    #[test]
    fn test_missing_header_is_fatal() {
        let result: Result<SparseMatrix<i64>> = parse_triplets("rows=2", ReadOptions::lenient());
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn test_malformed_header_is_fatal() {
        let result: Result<SparseMatrix<i64>> =
            parse_triplets("rows=two\ncols=2", ReadOptions::lenient());
        assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn test_triplet_line_shapes() {
        assert_eq!(parse_triplet_line::<i64>("(1, 2, 3)"), Some((1, 2, 3)));
        assert_eq!(parse_triplet_line::<i64>("(1,2,3)"), Some((1, 2, 3)));
        assert_eq!(parse_triplet_line::<f64>("(0, 0, -1.5)"), Some((0, 0, -1.5)));
        assert_eq!(parse_triplet_line::<i64>("1, 2, 3"), None);
        assert_eq!(parse_triplet_line::<i64>("(1, 2)"), None);
        assert_eq!(parse_triplet_line::<i64>("(1, 2, 3, 4)"), None);
        assert_eq!(parse_triplet_line::<i64>("(a, 2, 3)"), None);
        assert_eq!(parse_triplet_line::<i64>("(-1, 2, 3)"), None);
    }
}
