//! `RentalRequest`: the validated input of a checkout.

use chrono::NaiveDate;
use rc_core::errors::Result;
use rc_core::validate;

/// A rental request that passed validation.
///
/// Fields are read-only; a request can only be obtained through
/// [`RentalRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRequest {
    tool_code: String,
    days: u32,
    discount_percent: u32,
    checkout_date: NaiveDate,
}

impl RentalRequest {
    /// Validate and build a request.
    ///
    /// The day count is checked first, then the discount; the first failure
    /// is returned as [`Error::Validation`](rc_core::Error::Validation).
    pub fn new(
        tool_code: impl Into<String>,
        days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> Result<Self> {
        validate!(
            days >= 1,
            "days must be >= 1: the number of rental days is {days}"
        );
        validate!(
            (0..=100).contains(&discount_percent),
            "discount out of range: {discount_percent}% is not within 0-100"
        );
        let days = u32::try_from(days).map_err(|_| {
            rc_core::Error::Validation(format!("days must be <= {}: got {days}", u32::MAX))
        })?;
        Ok(Self {
            tool_code: tool_code.into(),
            days,
            discount_percent: discount_percent as u32,
            checkout_date,
        })
    }

    /// Requested tool code.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// Number of rental days (≥ 1).
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Discount percentage (0–100).
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }
}
