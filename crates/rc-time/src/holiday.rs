//! `HolidayDefinition`: an abstract holiday rule.
//!
//! A definition is either a **fixed-date** rule (same month/day every year,
//! optionally moved off weekends) or a **pattern** rule (the *n*-th
//! occurrence of a weekday in a month).  The two flags are stored
//! independently, as they are in the catalog data; when both are set the
//! fixed-date rule takes precedence.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::weekday::{parse_month, parse_weekday};

/// Highest week ordinal accepted for a pattern rule.
pub const MAX_WEEK_NUMBER: u32 = 5;

/// An immutable holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayDefinition {
    /// Holiday name; also the cache key together with the year.
    pub name: String,
    /// Observed on the same month/day every year.
    #[serde(default)]
    pub fixed_date: bool,
    /// Month of the year (1–12).
    pub month: u32,
    /// Day of the month; only meaningful for fixed-date rules.
    #[serde(default)]
    pub day_of_month: u32,
    /// Move a fixed date that lands on Saturday to Friday, Sunday to Monday.
    #[serde(default)]
    pub weekend_observance: bool,
    /// Observed on the `week_number`-th `weekday` of the month.
    #[serde(default)]
    pub pattern_observance: bool,
    /// Target weekday of a pattern rule.
    #[serde(default)]
    pub weekday: Option<Weekday>,
    /// 1-based occurrence of `weekday` within the month.
    #[serde(default)]
    pub week_number: u32,
}

/// The rule a [`HolidayDefinition`] resolves with, after flag precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservanceRule {
    /// `month`/`day` every year, optionally shifted off weekends.
    Fixed {
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
        /// Shift Saturday back to Friday and Sunday forward to Monday.
        shift_weekends: bool,
    },
    /// The `week`-th `weekday` of `month`.
    NthWeekday {
        /// Month (1–12).
        month: u32,
        /// Target weekday.
        weekday: Weekday,
        /// 1-based occurrence.
        week: u32,
    },
}

impl ObservanceRule {
    /// Return the date this rule is observed on in `year`.
    ///
    /// Returns `None` when the fixed day does not exist in that year (Feb 29
    /// outside a leap year) or the month is out of range.
    ///
    /// A pattern week number that runs past the end of the month is not
    /// corrected: the 5th Monday of a month with four Mondays lands in the
    /// following month.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            ObservanceRule::Fixed {
                month,
                day,
                shift_weekends,
            } => {
                let nominal = NaiveDate::from_ymd_opt(year, month, day)?;
                if !shift_weekends {
                    return Some(nominal);
                }
                match nominal.weekday() {
                    Weekday::Sat => nominal.pred_opt(),
                    Weekday::Sun => nominal.succ_opt(),
                    _ => Some(nominal),
                }
            }
            ObservanceRule::NthWeekday {
                month,
                weekday,
                week,
            } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let skip = (7 + weekday.num_days_from_monday()
                    - first.weekday().num_days_from_monday())
                    % 7;
                let days = i64::from(skip) + 7 * (i64::from(week) - 1);
                first.checked_add_signed(Duration::days(days))
            }
        }
    }
}

impl HolidayDefinition {
    /// A fixed-date holiday on `month`/`day`.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32, weekend_observance: bool) -> Self {
        Self {
            name: name.into(),
            fixed_date: true,
            month,
            day_of_month: day,
            weekend_observance,
            pattern_observance: false,
            weekday: None,
            week_number: 0,
        }
    }

    /// A pattern holiday on the `week_number`-th `weekday` of `month`.
    pub fn nth_weekday(
        name: impl Into<String>,
        month: u32,
        weekday: Weekday,
        week_number: u32,
    ) -> Self {
        Self {
            name: name.into(),
            fixed_date: false,
            month,
            day_of_month: 0,
            weekend_observance: false,
            pattern_observance: true,
            weekday: Some(weekday),
            week_number,
        }
    }

    /// The rule this definition resolves with, or `None` when neither flag
    /// yields a usable rule.
    pub fn rule(&self) -> Option<ObservanceRule> {
        if self.fixed_date {
            Some(ObservanceRule::Fixed {
                month: self.month,
                day: self.day_of_month,
                shift_weekends: self.weekend_observance,
            })
        } else if self.pattern_observance {
            self.weekday.map(|weekday| ObservanceRule::NthWeekday {
                month: self.month,
                weekday,
                week: self.week_number,
            })
        } else {
            None
        }
    }

    /// Resolve without any caching.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        self.rule()?.observed_in(year)
    }

    /// Check that the definition describes a resolvable rule.
    pub fn validate(&self) -> Result<()> {
        let name = &self.name;
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("holiday name is empty".into()));
        }
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidArgument(format!(
                "{name}: month {} out of range [1, 12]",
                self.month
            )));
        }
        if !self.fixed_date && !self.pattern_observance {
            return Err(Error::InvalidArgument(format!(
                "{name}: neither fixed-date nor pattern observance is set"
            )));
        }
        if self.fixed_date {
            if !(1..=31).contains(&self.day_of_month) {
                return Err(Error::InvalidArgument(format!(
                    "{name}: day {} out of range [1, 31]",
                    self.day_of_month
                )));
            }
        } else {
            if self.weekday.is_none() {
                return Err(Error::InvalidArgument(format!(
                    "{name}: pattern holiday has no weekday"
                )));
            }
            if !(1..=MAX_WEEK_NUMBER).contains(&self.week_number) {
                return Err(Error::InvalidArgument(format!(
                    "{name}: week number {} out of range [1, {MAX_WEEK_NUMBER}]",
                    self.week_number
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for HolidayDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule() {
            Some(ObservanceRule::Fixed {
                month,
                day,
                shift_weekends,
            }) => {
                write!(f, "{} ({month:02}-{day:02}", self.name)?;
                if shift_weekends {
                    write!(f, ", weekend observed")?;
                }
                write!(f, ")")
            }
            Some(ObservanceRule::NthWeekday {
                month,
                weekday,
                week,
            }) => write!(f, "{} (#{week} {weekday} of month {month})", self.name),
            None => write!(f, "{} (no rule)", self.name),
        }
    }
}

/// Parse the comma-separated definition line used by holiday data files:
///
/// `name,fixed,MONTH,day,weekendObs,patternObs,WEEKDAY|null,weekNum`
///
/// ```
/// use rc_time::HolidayDefinition;
/// let h: HolidayDefinition = "Labor Day,false,SEPTEMBER,0,false,true,MONDAY,1".parse().unwrap();
/// assert!(h.pattern_observance);
/// assert_eq!(h.month, 9);
/// ```
impl FromStr for HolidayDefinition {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 8 {
            return Err(Error::InvalidArgument(format!(
                "expected 8 fields in holiday line, got {}: '{line}'",
                fields.len()
            )));
        }
        let weekday = match fields[6] {
            "null" | "NULL" | "" => None,
            name => Some(parse_weekday(name)?),
        };
        Ok(Self {
            name: fields[0].to_string(),
            fixed_date: parse_flag(fields[1])?,
            month: parse_month(fields[2])?,
            day_of_month: parse_number(fields[3])?,
            weekend_observance: parse_flag(fields[4])?,
            pattern_observance: parse_flag(fields[5])?,
            weekday,
            week_number: parse_number(fields[7])?,
        })
    }
}

fn parse_flag(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidArgument(format!("'{other}' is not a boolean"))),
    }
}

fn parse_number(s: &str) -> Result<u32> {
    s.parse()
        .map_err(|_| Error::InvalidArgument(format!("'{s}' is not a non-negative integer")))
}
