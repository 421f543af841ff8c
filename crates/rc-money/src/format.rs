//! Currency formatting.
//!
//! Rendering an amount for people is a locale concern the pricing code does
//! not own; it only talks to the [`FormatCurrency`] trait.
//! [`CurrencyFormatter`] renders US dollars, and any `Fn(Decimal) -> String`
//! can stand in for another locale.

use rust_decimal::Decimal;

use crate::currencies::USD;
use crate::currency::Currency;

/// Render a decimal amount as a localized currency string.
pub trait FormatCurrency {
    /// Format `amount` (e.g. `11.92` → `"$11.92"`).
    fn format_currency(&self, amount: Decimal) -> String;
}

impl<F> FormatCurrency for F
where
    F: Fn(Decimal) -> String,
{
    fn format_currency(&self, amount: Decimal) -> String {
        self(amount)
    }
}

/// Symbol-prefixed, comma-grouped layout: `$1,234.56`, `-$3.58`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: &'static Currency,
}

impl CurrencyFormatter {
    /// US dollars in US layout.
    pub fn en_us() -> Self {
        Self { currency: &USD }
    }

    /// Currency whose symbol and precision are used.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FormatCurrency for CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String {
        let rounded = self.currency.round(amount);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.*}", self.currency.rounding as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(whole);
        if let Some(f) = fraction {
            number.push('.');
            number.push_str(f);
        }
        format!("{sign}{}{number}", self.currency.symbol)
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
