//! Billable-day counting and charge totals.
//!
//! Each day of the rental window, starting on the checkout date and running
//! for the requested number of days, is billable when the tool's profile
//! bills its category (weekday or weekend) and, unless the profile also bills
//! holidays, the day is not a holiday.

use chrono::{Days, NaiveDate};
use rc_core::errors::{Error, Result};
use rc_money::round_money;
use rc_time::{is_weekend, HolidayCalendar};
use rust_decimal::Decimal;

use crate::charges::ChargeProfile;

/// Pre-discount charge, discount, and total of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeTotals {
    /// `daily_rate × charge_days`, unrounded.
    pub pre_discount: Decimal,
    /// Discount rounded to cents, half-up.
    pub discount_amount: Decimal,
    /// `pre_discount − discount_amount`.
    pub total: Decimal,
}

/// Counts billable days against an injected holiday calendar.
#[derive(Debug, Clone, Copy)]
pub struct ChargeCalculator<'a> {
    calendar: &'a dyn HolidayCalendar,
}

impl<'a> ChargeCalculator<'a> {
    /// Create a calculator that asks `calendar` about holidays.
    pub fn new(calendar: &'a dyn HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// The checkout date plus `days` calendar days.
    pub fn due_date(checkout: NaiveDate, days: u32) -> Result<NaiveDate> {
        checkout
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| Error::Date(format!("{checkout} + {days} days is out of range")))
    }

    /// Return `true` if `day` is billed under `profile`.
    pub fn is_billable(&self, day: NaiveDate, profile: &ChargeProfile) -> bool {
        let billed = if is_weekend(day) {
            profile.weekend_charge
        } else {
            profile.weekday_charge
        };
        billed && (profile.holiday_charge || !self.calendar.is_holiday(day))
    }

    /// Number of billable days in the `days`-long window starting at
    /// `checkout`.
    pub fn charge_days(
        &self,
        checkout: NaiveDate,
        days: u32,
        profile: &ChargeProfile,
    ) -> Result<u32> {
        let due = Self::due_date(checkout, days)?;
        let count = checkout
            .iter_days()
            .take(days as usize)
            .take_while(|day| *day <= due)
            .filter(|day| self.is_billable(*day, profile))
            .count();
        // `count` never exceeds `days`, which is a u32.
        Ok(count as u32)
    }

    /// Pre-discount charge, discount amount, and total.
    ///
    /// Only the discount is rounded; the pre-discount charge keeps full
    /// precision.
    pub fn totals(charge_days: u32, daily_rate: Decimal, discount_percent: u32) -> ChargeTotals {
        let pre_discount = daily_rate * Decimal::from(charge_days);
        let discount_amount =
            round_money(pre_discount * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED);
        ChargeTotals {
            pre_discount,
            discount_amount,
            total: pre_discount - discount_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_time::{BespokeHolidays, NoHolidays};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chainsaw() -> ChargeProfile {
        ChargeProfile::new("Chainsaw", dec!(1.49), true, false, true)
    }

    fn ladder() -> ChargeProfile {
        ChargeProfile::new("Ladder", dec!(1.99), true, true, false)
    }

    fn jackhammer() -> ChargeProfile {
        ChargeProfile::new("Jackhammer", dec!(2.99), true, false, false)
    }

    #[test]
    fn due_date_is_calendar_days() {
        assert_eq!(
            ChargeCalculator::due_date(date(2023, 5, 16), 10).unwrap(),
            date(2023, 5, 26)
        );
        assert!(ChargeCalculator::due_date(NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn weekday_only_profile_skips_weekends() {
        let calc = ChargeCalculator::new(&NoHolidays);
        assert_eq!(calc.charge_days(date(2023, 5, 16), 10, &chainsaw()).unwrap(), 8);
        assert_eq!(calc.charge_days(date(2023, 5, 16), 10, &ladder()).unwrap(), 10);
    }

    #[test]
    fn holidays_excluded_unless_billed() {
        // 2023-05-29 is a Monday.
        let cal = BespokeHolidays::with_dates("Memorial", [date(2023, 5, 29)]);
        let calc = ChargeCalculator::new(&cal);
        assert_eq!(calc.charge_days(date(2023, 5, 26), 4, &jackhammer()).unwrap(), 1);
        assert_eq!(calc.charge_days(date(2023, 5, 26), 4, &chainsaw()).unwrap(), 2);
        assert_eq!(calc.charge_days(date(2023, 5, 26), 4, &ladder()).unwrap(), 3);
    }

    #[test]
    fn weekend_is_saturday_and_sunday() {
        let calc = ChargeCalculator::new(&NoHolidays);
        // 2023-05-20 is a Saturday.
        let days: Vec<_> = date(2023, 5, 19)
            .iter_days()
            .take(4)
            .map(|d| calc.is_billable(d, &jackhammer()))
            .collect();
        assert_eq!(days, [true, false, false, true]);
        assert_eq!(calc.charge_days(date(2023, 5, 20), 2, &jackhammer()).unwrap(), 0);
        assert_eq!(calc.charge_days(date(2023, 5, 20), 2, &ladder()).unwrap(), 2);
    }

    #[test]
    fn holiday_on_weekend_only_matters_for_weekend_billing() {
        // 2020-07-04 is a Saturday.
        let cal = BespokeHolidays::with_dates("July 4th", [date(2020, 7, 4)]);
        let calc = ChargeCalculator::new(&cal);
        assert!(!calc.is_billable(date(2020, 7, 4), &ladder()));
        assert!(!calc.is_billable(date(2020, 7, 4), &chainsaw()));
        assert!(calc.is_billable(date(2020, 7, 5), &ladder()));
    }

    #[test]
    fn totals_round_only_the_discount() {
        let t = ChargeCalculator::totals(8, dec!(1.49), 70);
        assert_eq!(t.pre_discount, dec!(11.92));
        assert_eq!(t.discount_amount, dec!(8.34));
        assert_eq!(t.total, dec!(3.58));

        let t = ChargeCalculator::totals(1, dec!(2.99), 50);
        assert_eq!(t.discount_amount, dec!(1.50));
        assert_eq!(t.total, dec!(1.49));

        let t = ChargeCalculator::totals(3, dec!(1.333), 0);
        assert_eq!(t.pre_discount, dec!(3.999));
        assert_eq!(t.total, dec!(3.999));
    }

    #[test]
    fn full_discount_is_free() {
        let t = ChargeCalculator::totals(10, dec!(1.99), 100);
        assert_eq!(t.discount_amount, dec!(19.90));
        assert_eq!(t.total, Decimal::ZERO);
    }
}
