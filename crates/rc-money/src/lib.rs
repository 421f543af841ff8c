//! # rc-money
//!
//! Currency metadata, monetary rounding, and the [`FormatCurrency`] seam
//! through which amounts are rendered for people.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Pre-defined currencies.
pub mod currencies;

/// Currency data.
pub mod currency;

/// Currency formatting.
pub mod format;

/// Monetary rounding.
pub mod rounding;

pub use currency::Currency;
pub use format::{CurrencyFormatter, FormatCurrency};
pub use rounding::{round, round_money};
