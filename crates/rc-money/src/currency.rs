//! `Currency` metadata.

use rust_decimal::Decimal;

use crate::rounding::round;

/// Data describing a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Symbol used when displaying amounts (e.g. "$").
    pub symbol: &'static str,
    /// Number of decimal places amounts are rounded to.
    pub rounding: u32,
}

impl Currency {
    /// Round `amount` to this currency's precision, half away from zero.
    pub fn round(&self, amount: Decimal) -> Decimal {
        round(amount, self.rounding)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
