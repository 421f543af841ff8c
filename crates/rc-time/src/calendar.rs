//! `HolidayCalendar` trait and the trivial calendar.
//!
//! A holiday calendar answers one question: is this date a holiday?  The
//! charge calculator depends only on this trait, so the resolver and the
//! fixture calendars are interchangeable.  Weekends are not a calendar
//! concern; see [`is_weekend`](crate::weekday::is_weekend).

use chrono::NaiveDate;

/// A source of holiday answers.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
