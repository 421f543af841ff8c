//! # rc-core
//!
//! Foundational pieces shared by every crate in the rentcalc workspace: the
//! error enum, the `Result` alias, and the `ensure!` and `validate!`
//! macros used to report broken preconditions and rejected requests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` and `validate!` macros.
pub mod errors;

pub use errors::{Error, Result};
