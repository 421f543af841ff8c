//! `ChargeProfile`: which day categories a tool type bills for.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily rate and billable day categories for one tool type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeProfile {
    /// Tool type this profile applies to (e.g. "Ladder").
    pub tool_type: String,
    /// Charge per billable day.
    pub daily_rate: Decimal,
    /// Bill Monday–Friday.
    pub weekday_charge: bool,
    /// Bill Saturday and Sunday.
    pub weekend_charge: bool,
    /// Bill holidays; when `false`, holidays are excluded from the weekday
    /// and weekend categories.
    pub holiday_charge: bool,
}

impl ChargeProfile {
    /// Create a profile.
    pub fn new(
        tool_type: impl Into<String>,
        daily_rate: Decimal,
        weekday_charge: bool,
        weekend_charge: bool,
        holiday_charge: bool,
    ) -> Self {
        Self {
            tool_type: tool_type.into(),
            daily_rate,
            weekday_charge,
            weekend_charge,
            holiday_charge,
        }
    }
}
