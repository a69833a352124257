//! Element trait for mapping Rust numeric types into the matrix

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Trait for types that can be stored in a sparse matrix
///
/// Implemented for the primitive integer and floating-point types the
/// triplet format carries (`i32`, `i64`, `f32`, `f64`).
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul` - Arithmetic operations (Output = Self)
/// - `PartialEq` - Comparison against the additive identity
///
/// Note: `Neg` is NOT required. Negation is expressed as
/// `Element::zero() - value`, which keeps the bound set small enough for
/// unsigned types should they ever be added.
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + PartialEq
    + Debug
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Parse a single value token from the triplet text format
    ///
    /// Returns `None` when the token is not a valid literal for this type;
    /// the reader decides whether that skips the line or fails the parse.
    fn parse(token: &str) -> Option<Self>;

    /// Returns true if the value equals the additive identity
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Element for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Element for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert!(<f64 as Element>::zero().is_zero());
        assert!(!<f64 as Element>::one().is_zero());
        assert_eq!(<i32 as Element>::one() + <i32 as Element>::one(), 2);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(<i64 as Element>::parse("42"), Some(42));
        assert_eq!(<f64 as Element>::parse("-3.5"), Some(-3.5));
        assert_eq!(<i64 as Element>::parse("3.5"), None);
        assert_eq!(<f32 as Element>::parse("abc"), None);
    }
}
