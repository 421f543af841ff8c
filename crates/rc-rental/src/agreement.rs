//! `RentalAgreement`: the priced result of a checkout.
//!
//! Every derived figure is computed once, when the agreement is built.

use std::fmt;

use chrono::NaiveDate;
use rc_core::ensure;
use rc_core::errors::Result;
use rc_money::{CurrencyFormatter, FormatCurrency};
use rc_time::HolidayCalendar;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculator::{ChargeCalculator, ChargeTotals};
use crate::request::RentalRequest;
use crate::tool::{Brand, Tool};

/// Date layout used in the agreement report (`05/16/23`).
const REPORT_DATE_FORMAT: &str = "%m/%d/%y";

/// A priced rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalAgreement {
    request: RentalRequest,
    tool: Tool,
    due_date: NaiveDate,
    charge_days: u32,
    totals: ChargeTotals,
}

impl RentalAgreement {
    /// Price `request` for `tool`, consulting `calendar` for holidays.
    pub fn new(request: RentalRequest, tool: Tool, calendar: &dyn HolidayCalendar) -> Result<Self> {
        ensure!(
            tool.code == request.tool_code(),
            "tool {} does not match requested tool {}",
            tool.code,
            request.tool_code()
        );
        let calculator = ChargeCalculator::new(calendar);
        let due_date = ChargeCalculator::due_date(request.checkout_date(), request.days())?;
        let charge_days =
            calculator.charge_days(request.checkout_date(), request.days(), &tool.charges)?;
        let totals = ChargeCalculator::totals(
            charge_days,
            tool.charges.daily_rate,
            request.discount_percent(),
        );
        debug!(
            tool = %tool.code,
            checkout = %request.checkout_date(),
            days = request.days(),
            charge_days,
            total = %totals.total,
            "priced rental"
        );
        Ok(Self {
            request,
            tool,
            due_date,
            charge_days,
            totals,
        })
    }

    /// The request this agreement prices.
    pub fn request(&self) -> &RentalRequest {
        &self.request
    }

    /// The rented tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Tool code.
    pub fn tool_code(&self) -> &str {
        &self.tool.code
    }

    /// Tool type.
    pub fn tool_type(&self) -> &str {
        &self.tool.tool_type
    }

    /// Tool brand.
    pub fn brand(&self) -> Brand {
        self.tool.brand
    }

    /// Number of rental days.
    pub fn rental_days(&self) -> u32 {
        self.request.days()
    }

    /// Checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.request.checkout_date()
    }

    /// Checkout date plus the rental days.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Daily rental charge of the tool's type.
    pub fn daily_charge(&self) -> Decimal {
        self.tool.charges.daily_rate
    }

    /// Number of billable days.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    /// Discount percentage.
    pub fn discount_percent(&self) -> u32 {
        self.request.discount_percent()
    }

    /// Charge before the discount.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.totals.pre_discount
    }

    /// Discount amount, rounded to cents.
    pub fn discount_amount(&self) -> Decimal {
        self.totals.discount_amount
    }

    /// Final charge.
    pub fn total(&self) -> Decimal {
        self.totals.total
    }

    /// All three money figures.
    pub fn totals(&self) -> ChargeTotals {
        self.totals
    }

    /// Render the agreement, one field per line, with amounts formatted by
    /// `money`.
    pub fn report(&self, money: &dyn FormatCurrency) -> String {
        [
            format!("Tool code: {}", self.tool_code()),
            format!("Tool type: {}", self.tool_type()),
            format!("Tool brand: {}", self.brand()),
            format!("Rental days: {}", self.rental_days()),
            format!(
                "Check out date: {}",
                self.checkout_date().format(REPORT_DATE_FORMAT)
            ),
            format!("Due date: {}", self.due_date().format(REPORT_DATE_FORMAT)),
            format!(
                "Daily rental charge: {}",
                money.format_currency(self.daily_charge())
            ),
            format!("Charge days: {}", self.charge_days()),
            format!(
                "Pre-discount charge: {}",
                money.format_currency(self.pre_discount_charge())
            ),
            format!("Discount percent: {}%", self.discount_percent()),
            format!(
                "Discount amount: {}",
                money.format_currency(self.discount_amount())
            ),
            format!("Final charge: {}", money.format_currency(self.total())),
        ]
        .join("\n")
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(&CurrencyFormatter::en_us()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charges::ChargeProfile;
    use rc_core::Error;
    use rc_time::NoHolidays;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chns() -> Tool {
        Tool::new(
            "CHNS",
            Brand::Stihl,
            ChargeProfile::new("Chainsaw", dec!(1.49), true, false, true),
        )
    }

    #[test]
    fn derived_fields() {
        let request = RentalRequest::new("CHNS", 10, 70, date(2023, 5, 16)).unwrap();
        let agreement = RentalAgreement::new(request, chns(), &NoHolidays).unwrap();
        assert_eq!(agreement.due_date(), date(2023, 5, 26));
        assert_eq!(agreement.charge_days(), 8);
        assert_eq!(agreement.pre_discount_charge(), dec!(11.92));
        assert_eq!(agreement.discount_amount(), dec!(8.34));
        assert_eq!(agreement.total(), dec!(3.58));
    }

    #[test]
    fn report_layout() {
        let request = RentalRequest::new("CHNS", 10, 70, date(2023, 5, 16)).unwrap();
        let agreement = RentalAgreement::new(request, chns(), &NoHolidays).unwrap();
        let expected = "\
Tool code: CHNS
Tool type: Chainsaw
Tool brand: Stihl
Rental days: 10
Check out date: 05/16/23
Due date: 05/26/23
Daily rental charge: $1.49
Charge days: 8
Pre-discount charge: $11.92
Discount percent: 70%
Discount amount: $8.34
Final charge: $3.58";
        assert_eq!(agreement.to_string(), expected);
    }

    #[test]
    fn report_uses_supplied_formatter() {
        let request = RentalRequest::new("CHNS", 1, 0, date(2023, 5, 16)).unwrap();
        let agreement = RentalAgreement::new(request, chns(), &NoHolidays).unwrap();
        let report = agreement.report(&|d: Decimal| format!("{d} USD"));
        assert!(report.contains("Final charge: 1.49 USD"));
    }

    #[test]
    fn mismatched_tool_is_rejected() {
        let request = RentalRequest::new("LADW", 3, 10, date(2020, 7, 2)).unwrap();
        let err = RentalAgreement::new(request, chns(), &NoHolidays).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}
