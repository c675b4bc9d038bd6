//! Factorial computed by iteration and by recursion.
//!
//! Both variants share one precondition gate: the input must lie in
//! `0..=MAX_FACTORIAL_INPUT`. Anything else is rejected with
//! [`KataError::InvalidArgument`] before any multiplication happens, so the
//! `u64` product can never overflow.

use crate::error::{KataError, Result};
use std::fmt;

/// Largest input whose factorial fits in a `u64` (20! = 2432902008176640000)
pub const MAX_FACTORIAL_INPUT: i64 = 20;

fn check_input(n: i64) -> Result<u64> {
    if n < 0 {
        log::debug!("rejecting negative factorial input {n}");
        return Err(KataError::invalid_argument("Number must be non-negative"));
    }
    if n > MAX_FACTORIAL_INPUT {
        log::debug!("rejecting factorial input {n} above {MAX_FACTORIAL_INPUT}");
        return Err(KataError::invalid_argument(format!(
            "Number must be at most {MAX_FACTORIAL_INPUT}, {n}! overflows u64"
        )));
    }
    Ok(n as u64)
}

/// Computes `n!` with a running product over `1..=n`.
///
/// Returns 1 for `n = 0`.
///
/// # Errors
/// [`KataError::InvalidArgument`] when `n` is negative or above
/// [`MAX_FACTORIAL_INPUT`].
///
/// # Example
///
/// ```rust
/// use katas_core::factorial_iterative;
///
/// assert_eq!(factorial_iterative(5).unwrap(), 120);
/// assert!(factorial_iterative(-1).is_err());
/// ```
pub fn factorial_iterative(n: i64) -> Result<u64> {
    let n = check_input(n)?;
    Ok((1..=n).product())
}

/// Computes `n!` as `n * (n - 1)!`, bottoming out at 1 for `n <= 1`.
///
/// Same domain, result and errors as [`factorial_iterative`].
pub fn factorial_recursive(n: i64) -> Result<u64> {
    let n = check_input(n)?;
    Ok(recurse(n))
}

fn recurse(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n * recurse(n - 1)
}

/// Lookup table holding `0!` through `20!`
pub fn factorial_table() -> [u64; MAX_FACTORIAL_INPUT as usize + 1] {
    let mut entries = [1u64; MAX_FACTORIAL_INPUT as usize + 1];
    for i in 2..entries.len() {
        entries[i] = i as u64 * entries[i - 1];
    }
    entries
}

/// Names one of the factorial implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FactorialMethod {
    /// Running product
    Iterative,
    /// `n * f(n - 1)` decomposition
    Recursive,
}

impl FactorialMethod {
    /// Every method, in presentation order
    pub const ALL: [FactorialMethod; 2] = [FactorialMethod::Iterative, FactorialMethod::Recursive];

    /// Human-readable method name
    pub fn name(&self) -> &'static str {
        match self {
            FactorialMethod::Iterative => "Iterative",
            FactorialMethod::Recursive => "Recursive",
        }
    }

    /// Run this method on `n`
    pub fn compute(&self, n: i64) -> Result<u64> {
        match self {
            FactorialMethod::Iterative => factorial_iterative(n),
            FactorialMethod::Recursive => factorial_recursive(n),
        }
    }
}

impl fmt::Display for FactorialMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(factorial_iterative(0).unwrap(), 1);
        assert_eq!(factorial_iterative(1).unwrap(), 1);
        assert_eq!(factorial_iterative(5).unwrap(), 120);
        assert_eq!(factorial_recursive(0).unwrap(), 1);
        assert_eq!(factorial_recursive(1).unwrap(), 1);
        assert_eq!(factorial_recursive(5).unwrap(), 120);
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(factorial_iterative(20).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(factorial_recursive(20).unwrap(), 2_432_902_008_176_640_000);
        assert!(matches!(
            factorial_iterative(21),
            Err(KataError::InvalidArgument(_))
        ));
        assert!(matches!(
            factorial_recursive(21),
            Err(KataError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_negative_input_rejected() {
        let err = factorial_iterative(-1).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: Number must be non-negative");
        assert_eq!(factorial_recursive(-1).unwrap_err(), err);
        assert!(factorial_iterative(i64::MIN).is_err());
    }

    #[test]
    fn test_table_matches_iterative() {
        for (n, expected) in factorial_table().iter().enumerate() {
            assert_eq!(factorial_iterative(n as i64).unwrap(), *expected);
        }
    }

    #[test]
    fn test_method_dispatch() {
        for method in FactorialMethod::ALL {
            assert_eq!(method.compute(6).unwrap(), 720);
        }
        assert_eq!(FactorialMethod::Recursive.to_string(), "Recursive");
    }
}
