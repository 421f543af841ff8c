//! Bespoke holiday calendar: holidays listed explicitly by date.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;

/// A calendar whose holidays are added by hand.
#[derive(Debug, Clone)]
pub struct BespokeHolidays {
    name: String,
    holidays: BTreeSet<NaiveDate>,
}

impl BespokeHolidays {
    /// Create an empty calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from a list of dates.
    pub fn with_dates(name: impl Into<String>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Add a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Number of holidays in the calendar.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for BespokeHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn added_holidays_are_holidays() {
        let mut cal = BespokeHolidays::new("Custom");
        let holiday = date(2024, 3, 15);
        assert!(!cal.is_holiday(holiday));

        cal.add_holiday(holiday);
        cal.add_holiday(holiday);
        assert!(cal.is_holiday(holiday));
        assert!(!cal.is_holiday(date(2024, 3, 16)));
        assert_eq!(cal.holiday_count(), 1);
    }

    #[test]
    fn with_dates() {
        let cal = BespokeHolidays::with_dates(
            "Multi",
            [date(2024, 12, 25), date(2024, 12, 26), date(2025, 1, 1)],
        );
        assert_eq!(cal.name(), "Multi");
        assert_eq!(cal.holiday_count(), 3);
        assert!(cal.is_holiday(date(2025, 1, 1)));
        assert!(!cal.is_holiday(date(2024, 12, 31)));
    }
}
