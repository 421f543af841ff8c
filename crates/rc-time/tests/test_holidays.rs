//! Integration tests for holiday resolution.
//!
//! Exercises `HolidayDefinition`, `HolidayResolver`, and the `HolidayCalendar`
//! implementations together, including property checks over many years.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use rc_time::{BespokeHolidays, HolidayCalendar, HolidayDefinition, HolidayResolver, NoHolidays};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const HOLIDAY_LINES: &str = "\
New Year's Day,true,JANUARY,1,false,false,null,0
Independence Day,true,JULY,4,true,false,null,0
Labor Day,false,SEPTEMBER,0,false,true,MONDAY,1
Veterans Day,true,NOVEMBER,11,true,false,null,0
Thanksgiving Day,false,NOVEMBER,0,false,true,THURSDAY,4
Christmas Day,true,DECEMBER,25,true,false,null,0";

fn definitions() -> Vec<HolidayDefinition> {
    HOLIDAY_LINES
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

// ─── Reference dates ──────────────────────────────────────────────────────────

#[test]
fn independence_day_weekdays() {
    let july4 = HolidayDefinition::fixed("Independence Day", 7, 4, true);
    let resolver = HolidayResolver::new(vec![july4.clone()]);
    let observed = |y| resolver.resolve(&july4, y).unwrap();

    assert_eq!(observed(2023).weekday(), Weekday::Tue);
    assert_eq!(observed(2022).weekday(), Weekday::Mon);
    assert_eq!(observed(2024).weekday(), Weekday::Thu);
    assert_eq!(observed(2020), date(2020, 7, 3));
    assert_eq!(observed(2021), date(2021, 7, 5));
}

#[test]
fn labor_day_dates() {
    let labor = HolidayDefinition::nth_weekday("Labor Day", 9, Weekday::Mon, 1);
    let resolver = HolidayResolver::new(vec![labor.clone()]);

    assert_eq!(resolver.resolve(&labor, 2023), Some(date(2023, 9, 4)));
    assert_eq!(resolver.resolve(&labor, 2022), Some(date(2022, 9, 5)));
    assert_eq!(resolver.resolve(&labor, 2024), Some(date(2024, 9, 2)));
    assert_eq!(resolver.resolve(&labor, 2020), Some(date(2020, 9, 7)));
}

#[test]
fn holidays_of_2021() {
    let resolver = HolidayResolver::new(definitions());
    let found: Vec<_> = date(2021, 1, 1)
        .iter_days()
        .take_while(|d| d.year() == 2021)
        .filter(|d| resolver.is_holiday(*d))
        .collect();
    assert_eq!(
        found,
        vec![
            date(2021, 1, 1),   // New Year's Day (Friday)
            date(2021, 7, 5),   // Independence Day (Sunday → Monday)
            date(2021, 9, 6),   // Labor Day
            date(2021, 11, 11), // Veterans Day (Thursday)
            date(2021, 11, 25), // Thanksgiving
            date(2021, 12, 24), // Christmas (Saturday → Friday)
        ]
    );
}

#[test]
fn only_the_observed_day_is_a_holiday() {
    let resolver = HolidayResolver::new(definitions());
    assert!(resolver.is_holiday(date(2023, 9, 4))); // Labor Day
    assert!(!resolver.is_holiday(date(2023, 9, 5)));
    assert!(!resolver.is_holiday(date(2023, 9, 11))); // second Monday
    assert!(!resolver.is_holiday(date(2023, 9, 9))); // Saturday
}

#[test]
fn fixture_calendars_agree_with_resolver_on_a_window() {
    let resolver = HolidayResolver::new(definitions());
    let bespoke = BespokeHolidays::with_dates("2015", [date(2015, 7, 3), date(2015, 9, 7)]);
    for d in date(2015, 7, 1).iter_days().take(80) {
        assert_eq!(resolver.is_holiday(d), bespoke.is_holiday(d), "{d}");
        assert!(!NoHolidays.is_holiday(d));
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn weekend_observed_dates_never_fall_on_weekends(
        year in 1950i32..2150,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let def = HolidayDefinition::fixed("Any", month, day, true);
        let nominal = date(year, month, day);
        let observed = def.observed_in(year).unwrap();
        match nominal.weekday() {
            Weekday::Sat => {
                prop_assert_eq!(observed, nominal.pred_opt().unwrap());
            }
            Weekday::Sun => {
                prop_assert_eq!(observed, nominal.succ_opt().unwrap());
            }
            _ => {
                prop_assert_eq!(observed, nominal);
            }
        }
        prop_assert!(!rc_time::is_weekend(observed));
    }

    #[test]
    fn pattern_resolution_lands_on_target_weekday(
        year in 1950i32..2150,
        month in 1u32..=12,
        weekday in weekday_strategy(),
        week in 1u32..=5,
    ) {
        let def = HolidayDefinition::nth_weekday("Any", month, weekday, week);
        let observed = def.observed_in(year).unwrap();
        prop_assert_eq!(observed.weekday(), weekday);
        let first = date(year, month, 1);
        let offset = (observed - first).num_days();
        prop_assert!(offset >= 7 * (i64::from(week) - 1));
        prop_assert!(offset < 7 * i64::from(week));
    }

    #[test]
    fn is_holiday_is_idempotent(
        year in 2000i32..2040,
        ordinal in 1u32..=365,
    ) {
        let resolver = HolidayResolver::new(definitions());
        let d = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let first = resolver.is_holiday(d);
        prop_assert_eq!(resolver.cache().cached_status(d), Some(first));
        prop_assert_eq!(resolver.is_holiday(d), first);
    }
}
