//! Memoisation for the holiday resolver.
//!
//! Two maps, each behind its own mutex:
//!
//! * resolved dates, keyed by holiday name and year;
//! * the holiday index, mapping a date to whether it is a holiday.
//!
//! Entries are write-once: the first value stored for a key wins and later
//! writes are ignored.  Resolution is deterministic, so a losing writer would
//! have stored the same value anyway.  Nothing is ever evicted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

/// Resolved-holiday and holiday-index caches owned by one resolver.
#[derive(Debug, Default)]
pub struct HolidayCache {
    resolved: Mutex<HashMap<String, HashMap<i32, NaiveDate>>>,
    index: Mutex<HashMap<NaiveDate, bool>>,
}

// A panic while holding one of these locks cannot leave a map half-written
// (every critical section is a single insert or lookup).
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HolidayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached resolution of `name` in `year`, if any.
    pub fn cached_resolution(&self, name: &str, year: i32) -> Option<NaiveDate> {
        lock(&self.resolved)
            .get(name)
            .and_then(|years| years.get(&year))
            .copied()
    }

    /// Return the cached holiday status of `date`, if any.
    pub fn cached_status(&self, date: NaiveDate) -> Option<bool> {
        lock(&self.index).get(&date).copied()
    }

    /// Record that `name` resolves to `date` in `year`, and that `date` is a
    /// holiday.  Returns the resolution now stored for `(name, year)`.
    pub fn record_resolution(&self, name: &str, year: i32, date: NaiveDate) -> NaiveDate {
        let stored = {
            let mut resolved = lock(&self.resolved);
            *resolved
                .entry(name.to_owned())
                .or_default()
                .entry(year)
                .or_insert(date)
        };
        self.record_status(stored, true);
        stored
    }

    /// Record the holiday status of `date` unless one is already stored.
    /// Returns the status now stored.
    pub fn record_status(&self, date: NaiveDate, is_holiday: bool) -> bool {
        *lock(&self.index).entry(date).or_insert(is_holiday)
    }

    /// Number of `(name, year)` resolutions cached.
    pub fn resolved_len(&self) -> usize {
        lock(&self.resolved).values().map(HashMap::len).sum()
    }

    /// Number of dates with a cached holiday status.
    pub fn indexed_len(&self) -> usize {
        lock(&self.index).len()
    }
}
