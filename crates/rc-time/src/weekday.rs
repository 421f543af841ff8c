//! Weekday and month helpers on top of `chrono`.
//!
//! Holiday definitions name their month and weekday in upper-case English
//! (`JULY`, `MONDAY`).  chrono's parsers accept any case.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use rc_core::errors::{Error, Result};

/// Return `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse an English weekday name (`"MONDAY"`, `"Tue"`, …).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let name = name.trim();
    name.parse::<Weekday>()
        .map_err(|_| Error::InvalidArgument(format!("'{name}' is not a weekday name")))
}

/// Parse an English month name (`"JANUARY"` … `"DECEMBER"`) to 1–12.
pub fn parse_month(name: &str) -> Result<u32> {
    let name = name.trim();
    name.parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| Error::InvalidArgument(format!("'{name}' is not a month name")))
}
