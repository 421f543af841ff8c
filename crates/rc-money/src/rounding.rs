//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `precision` decimal places, ties away from zero
/// (half-up for positive amounts).
pub fn round(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a monetary amount to cents, half-up.
pub fn round_money(value: Decimal) -> Decimal {
    round(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn closest_rounding() {
        assert_eq!(round(dec!(1.2345), 2), dec!(1.23));
        assert_eq!(round(dec!(1.2350), 2), dec!(1.24));
        assert_eq!(round(dec!(1.125), 2), dec!(1.13));
        assert_eq!(round_money(dec!(8.344)), dec!(8.34));
        assert_eq!(round_money(dec!(1.495)), dec!(1.50));
        assert_eq!(round_money(dec!(1.1175)), dec!(1.12));
    }

    #[test]
    fn short_amounts_are_unchanged() {
        assert_eq!(round_money(dec!(19.9)), dec!(19.9));
        assert_eq!(round_money(dec!(3)), dec!(3));
    }

    proptest! {
        #[test]
        fn money_rounding_is_within_half_a_cent(mantissa in -10_000_000i64..10_000_000, scale in 0u32..6) {
            let value = Decimal::new(mantissa, scale);
            let rounded = round_money(value);
            prop_assert!(rounded.scale() <= 2);
            prop_assert!((rounded - value).abs() <= dec!(0.005));
        }
    }
}
