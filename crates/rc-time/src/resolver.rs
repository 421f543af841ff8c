//! `HolidayResolver`: turns holiday definitions into dates.
//!
//! Two operations:
//!
//! * [`resolve`](HolidayResolver::resolve) maps one definition and a year to
//!   the date the holiday is observed on;
//! * [`is_holiday`](HolidayResolver::is_holiday) decides whether a date is a
//!   holiday by resolving the candidate definitions for its month.
//!
//! Results of both are kept in the resolver's [`HolidayCache`].  No lock is
//! held while the source is queried or a definition is resolved.

use chrono::{Datelike, NaiveDate};
use rc_core::errors::{Error, Result};
use tracing::{debug, trace, warn};

use crate::cache::HolidayCache;
use crate::calendar::HolidayCalendar;
use crate::holiday::HolidayDefinition;
use crate::settings::ResolverSettings;
use crate::source::HolidaySource;

/// Resolves holiday definitions from a [`HolidaySource`] and memoises the
/// answers.
///
/// `HolidayResolver` is `Sync` whenever its source is, so one instance can
/// serve concurrent charge calculations.
#[derive(Debug)]
pub struct HolidayResolver<S> {
    source: S,
    settings: ResolverSettings,
    cache: HolidayCache,
}

impl<S: HolidaySource> HolidayResolver<S> {
    /// Create a resolver with default settings and an empty cache.
    pub fn new(source: S) -> Self {
        Self::with_settings(source, ResolverSettings::default())
    }

    /// Create a resolver with explicit settings.
    pub fn with_settings(source: S, settings: ResolverSettings) -> Self {
        Self {
            source,
            settings,
            cache: HolidayCache::new(),
        }
    }

    /// The definitions source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The resolver settings.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// The resolver's cache.
    pub fn cache(&self) -> &HolidayCache {
        &self.cache
    }

    /// Return the date `definition` is observed on in `year`.
    ///
    /// Returns `None` if the definition has no usable rule or the fixed day
    /// does not exist in `year`.  A successful resolution is cached under
    /// `(name, year)` and marks the date as a holiday.
    pub fn resolve(&self, definition: &HolidayDefinition, year: i32) -> Option<NaiveDate> {
        if let Some(date) = self.cache.cached_resolution(&definition.name, year) {
            trace!(holiday = %definition.name, year, %date, "resolution cache hit");
            return Some(date);
        }
        let Some(date) = definition.observed_in(year) else {
            debug!(holiday = %definition, year, "definition does not resolve");
            return None;
        };
        debug!(holiday = %definition.name, year, %date, "resolved holiday");
        Some(self.cache.record_resolution(&definition.name, year, date))
    }

    /// Return `true` if `date` is a holiday.
    ///
    /// If the source cannot be read, the failure is logged and the date is
    /// treated (and cached) as an ordinary day so that a missing definitions
    /// store never blocks a checkout.  Use
    /// [`try_is_holiday`](Self::try_is_holiday) to observe the failure.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        if let Some(hit) = self.cache.cached_status(date) {
            return hit;
        }
        match self.source.list_holiday_definitions() {
            Ok(definitions) => {
                if self.matches_any(date, &definitions) {
                    return true;
                }
            }
            Err(error) => {
                warn!(%date, %error, "holiday definitions unavailable, assuming no holiday");
            }
        }
        self.cache.record_status(date, false)
    }

    /// Like [`is_holiday`](Self::is_holiday), but a source failure is returned
    /// as [`Error::Unavailable`] and nothing is cached for `date`.
    pub fn try_is_holiday(&self, date: NaiveDate) -> Result<bool> {
        if let Some(hit) = self.cache.cached_status(date) {
            return Ok(hit);
        }
        let definitions = self
            .source
            .list_holiday_definitions()
            .map_err(|e| match e {
                Error::Unavailable(_) => e,
                other => Error::Unavailable(other.to_string()),
            })?;
        if self.matches_any(date, &definitions) {
            return Ok(true);
        }
        Ok(self.cache.record_status(date, false))
    }

    /// Scan pattern definitions of the date's month first, then fixed-date
    /// definitions whose nominal day is within the configured window.  Stops
    /// at the first definition that resolves to `date`.
    fn matches_any(&self, date: NaiveDate, definitions: &[HolidayDefinition]) -> bool {
        let year = date.year();
        let month = date.month();

        let pattern_hit = definitions
            .iter()
            .filter(|h| h.pattern_observance && h.month == month)
            .find(|h| self.resolve(h, year) == Some(date));
        if let Some(h) = pattern_hit {
            trace!(%date, holiday = %h.name, "pattern holiday");
            return true;
        }

        let window = self.settings.candidate_days(date.day());
        let fixed_hit = definitions
            .iter()
            .filter(|h| h.fixed_date && h.month == month && window.contains(&h.day_of_month))
            .find(|h| self.resolve(h, year) == Some(date));
        if let Some(h) = fixed_hit {
            trace!(%date, holiday = %h.name, "fixed-date holiday");
            return true;
        }
        false
    }
}

impl<S: HolidaySource + std::fmt::Debug> HolidayCalendar for HolidayResolver<S> {
    fn name(&self) -> &str {
        "Resolved holidays"
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        HolidayResolver::is_holiday(self, date)
    }
}
