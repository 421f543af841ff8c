//! Error types for rentcalc.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single [`Error`] enum below.  Request validation, lookup
//! failures, and configuration problems each get their own variant so callers
//! can tell a rejected rental apart from an unavailable data source.

use thiserror::Error;

/// The top-level error type used throughout rentcalc.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rental request failed validation (bad day count, bad discount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No tool is registered under the requested code.
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// A backing lookup (holiday definitions, tool catalog) could not be read.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error (overflow, nonexistent calendar day).
    #[error("date error: {0}")]
    Date(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Return `true` if this error rejects the request itself rather than
    /// reporting a problem with a collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Shorthand `Result` type used throughout rentcalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rc_core::{ensure, errors::Error};
/// fn positive(x: i64) -> rc_core::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// Used for checks on caller-supplied request data.
///
/// # Example
/// ```
/// use rc_core::{validate, errors::Error};
/// fn days(n: u32) -> rc_core::Result<u32> {
///     validate!(n >= 1, "days must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(days(3).is_ok());
/// assert!(days(0).unwrap_err().is_validation());
/// ```
#[macro_export]
macro_rules! validate {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = Error::ToolNotFound("XYZ".into());
        assert_eq!(e.to_string(), "tool not found: XYZ");
        let e = Error::Validation("days must be >= 1".into());
        assert_eq!(e.to_string(), "validation failed: days must be >= 1");
    }

    #[test]
    fn only_validation_is_validation() {
        assert!(Error::Validation(String::new()).is_validation());
        assert!(!Error::Unavailable(String::new()).is_validation());
        assert!(!Error::ToolNotFound(String::new()).is_validation());
    }
}
