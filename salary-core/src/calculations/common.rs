//! Common utility functions for salary calculations.
//!
//! This module provides shared functionality used across the income tax and
//! net salary calculations, including rounding and other common operations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to whole currency units using round-half-to-even.
///
/// Values exactly halfway between two units go to the even neighbour, so
/// `0.5` rounds to `0` and `1.5` rounds to `2`. Only final figures are
/// rounded; intermediate values keep full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(25473.977)), dec!(25474));
/// assert_eq!(round_to_unit(dec!(2.5)), dec!(2));
/// assert_eq!(round_to_unit(dec!(3.5)), dec!(4));
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_unit tests
    // =========================================================================

    #[test]
    fn round_to_unit_rounds_down_below_midpoint() {
        let result = round_to_unit(dec!(123.49));

        assert_eq!(result, dec!(123));
    }

    #[test]
    fn round_to_unit_rounds_up_above_midpoint() {
        let result = round_to_unit(dec!(123.51));

        assert_eq!(result, dec!(124));
    }

    #[test]
    fn round_to_unit_midpoint_goes_to_even_below() {
        let result = round_to_unit(dec!(124.5));

        assert_eq!(result, dec!(124));
    }

    #[test]
    fn round_to_unit_midpoint_goes_to_even_above() {
        let result = round_to_unit(dec!(123.5));

        assert_eq!(result, dec!(124));
    }

    #[test]
    fn round_to_unit_preserves_whole_values() {
        let result = round_to_unit(dec!(110000));

        assert_eq!(result, dec!(110000));
    }

    #[test]
    fn round_to_unit_handles_zero() {
        let result = round_to_unit(dec!(0.00));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn round_to_unit_handles_negative_midpoint() {
        let result = round_to_unit(dec!(-2.5));

        assert_eq!(result, dec!(-2));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_clamps_negative_to_zero() {
        assert_eq!(max(dec!(-50.00), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(1000000), dec!(2467787)), dec!(1000000));
        assert_eq!(min(dec!(3000000), dec!(2467787)), dec!(2467787));
    }

    #[test]
    fn min_handles_equal_values() {
        assert_eq!(min(dec!(2467787), dec!(2467787)), dec!(2467787));
    }
}
