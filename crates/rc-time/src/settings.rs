//! Tunables of the [`HolidayResolver`](crate::HolidayResolver).

use serde::{Deserialize, Serialize};

/// Default half-width, in days, of the fixed-date candidate window.
///
/// A weekend-observed fixed holiday moves at most one day, so a window of
/// two covers every shifted date.
pub const DEFAULT_FIXED_DATE_WINDOW: u32 = 2;

/// Resolver settings, loadable from the `[resolver]` table of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// When checking a date, fixed-date definitions whose nominal day lies
    /// within this many days of the date are resolved and compared.
    #[serde(default = "default_fixed_date_window")]
    pub fixed_date_window: u32,
}

fn default_fixed_date_window() -> u32 {
    DEFAULT_FIXED_DATE_WINDOW
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            fixed_date_window: DEFAULT_FIXED_DATE_WINDOW,
        }
    }
}

impl ResolverSettings {
    /// Inclusive range of nominal days-of-month to consider for `day`,
    /// clamped to `[1, 31]`.
    pub fn candidate_days(&self, day: u32) -> std::ops::RangeInclusive<u32> {
        let lo = day.saturating_sub(self.fixed_date_window).max(1);
        let hi = day.saturating_add(self.fixed_date_window).min(31);
        lo..=hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_clamped_to_month_bounds() {
        let s = ResolverSettings::default();
        assert_eq!(s.candidate_days(1), 1..=3);
        assert_eq!(s.candidate_days(15), 13..=17);
        assert_eq!(s.candidate_days(31), 29..=31);
    }

    #[test]
    fn zero_window_matches_exact_day() {
        let s = ResolverSettings {
            fixed_date_window: 0,
        };
        assert_eq!(s.candidate_days(4), 4..=4);
    }
}
