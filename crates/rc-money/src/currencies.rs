//! Pre-defined currency constants.

use crate::currency::Currency;

/// US Dollar.
pub static USD: Currency = Currency {
    name: "U.S. Dollar",
    code: "USD",
    symbol: "$",
    rounding: 2,
};
