//! Fixed-precision currency arithmetic.
//!
//! Every monetary figure passes through [`to_money`] before it takes part in
//! a comparison, so totals never pick up binary floating-point drift.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::ReportCheckError;
use crate::types::{Money, Rate};
use crate::ReportCheckResult;

/// Fractional digits kept on currency amounts.
pub const DECIMAL_PLACES: u32 = 2;

/// Allowed gap between a reported and a recomputed currency amount.
pub const CURRENCY_TOLERANCE: Decimal = dec!(0.01);

/// Allowed gap for percentage and ratio fields (margin, runway). These are
/// derived from already-rounded amounts and carry more rounding error.
pub const RATIO_TOLERANCE: Decimal = dec!(0.1);

/// A statement is balanced when its two sides differ by less than this.
pub const BALANCE_THRESHOLD: Decimal = dec!(0.01);

pub const MS_PER_DAY: i64 = 86_400_000;

/// Round to two decimal places, ties away from zero (round-half-up in the
/// accounting sense, not banker's rounding).
pub fn to_money(value: Decimal) -> Money {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn out_of_range(field: &str) -> ReportCheckError {
    ReportCheckError::InvalidInput {
        field: field.to_string(),
        reason: "amount exceeds the representable decimal range".into(),
    }
}

/// `a + b`, failing on `field` when the result overflows.
pub fn add(field: &str, a: Decimal, b: Decimal) -> ReportCheckResult<Decimal> {
    a.checked_add(b).ok_or_else(|| out_of_range(field))
}

pub fn sub(field: &str, a: Decimal, b: Decimal) -> ReportCheckResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| out_of_range(field))
}

pub fn mul(field: &str, a: Decimal, b: Decimal) -> ReportCheckResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| out_of_range(field))
}

/// Exact sum of already-rounded amounts.
pub fn sum_money<I>(field: &str, values: I) -> ReportCheckResult<Money>
where
    I: IntoIterator<Item = Money>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| add(field, acc, v))
}

/// `numerator / denominator`, or `None` when the ratio is not applicable
/// because the denominator is zero.
pub fn safe_ratio(
    field: &str,
    numerator: Decimal,
    denominator: Decimal,
) -> ReportCheckResult<Option<Rate>> {
    if denominator.is_zero() {
        return Ok(None);
    }
    numerator
        .checked_div(denominator)
        .map(Some)
        .ok_or_else(|| out_of_range(field))
}

/// `|a - b| < tolerance`. A gap too wide to represent is outside any
/// tolerance.
pub fn within_tolerance(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    a.checked_sub(b)
        .map(|gap| gap.abs() < tolerance)
        .unwrap_or(false)
}

/// Tolerance test for values that may be "not applicable". Two absent
/// values agree; one absent and one present never do.
pub fn optional_within_tolerance(
    a: Option<Decimal>,
    b: Option<Decimal>,
    tolerance: Decimal,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => within_tolerance(a, b, tolerance),
        _ => false,
    }
}

/// Absolute gap between two figures, reported only when the comparison
/// failed. Passing comparisons contribute a zero discrepancy.
pub fn discrepancy(
    field: &str,
    calculated: Decimal,
    reported: Decimal,
    matched: bool,
) -> ReportCheckResult<Money> {
    if matched {
        Ok(Decimal::ZERO)
    } else {
        sub(field, calculated, reported).map(|gap| gap.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_money_rounds_half_up() {
        assert_eq!(to_money(dec!(1.005)), dec!(1.01));
        assert_eq!(to_money(dec!(2.675)), dec!(2.68));
        assert_eq!(to_money(dec!(0.125)), dec!(0.13));
        assert_eq!(to_money(dec!(1.004)), dec!(1.00));
    }

    #[test]
    fn test_to_money_negative_ties_move_away_from_zero() {
        assert_eq!(to_money(dec!(-1.005)), dec!(-1.01));
        assert_eq!(to_money(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_to_money_keeps_two_places() {
        assert_eq!(to_money(dec!(100)).to_string(), "100");
        assert_eq!(to_money(dec!(99.999)).to_string(), "100.00");
    }

    #[test]
    fn test_sum_money_empty_is_zero() {
        assert_eq!(sum_money("total", Vec::new()).unwrap(), Decimal::ZERO);
        assert_eq!(
            sum_money("total", vec![dec!(0.10), dec!(0.20)]).unwrap(),
            dec!(0.30)
        );
    }

    #[test]
    fn test_safe_ratio_zero_denominator() {
        assert_eq!(safe_ratio("ratio", dec!(10), Decimal::ZERO).unwrap(), None);
        assert_eq!(safe_ratio("ratio", dec!(10), dec!(4)).unwrap(), Some(dec!(2.5)));
    }

    #[test]
    fn test_optional_tolerance_rules() {
        assert!(optional_within_tolerance(None, None, RATIO_TOLERANCE));
        assert!(!optional_within_tolerance(Some(dec!(1)), None, RATIO_TOLERANCE));
        assert!(!optional_within_tolerance(None, Some(dec!(1)), RATIO_TOLERANCE));
        assert!(optional_within_tolerance(
            Some(dec!(12.0)),
            Some(dec!(12.05)),
            RATIO_TOLERANCE
        ));
        assert!(!optional_within_tolerance(
            Some(dec!(12.0)),
            Some(dec!(12.1)),
            RATIO_TOLERANCE
        ));
    }

    #[test]
    fn test_tolerance_is_strict() {
        assert!(!within_tolerance(dec!(1.00), dec!(1.01), CURRENCY_TOLERANCE));
        assert!(within_tolerance(dec!(1.00), dec!(1.009), CURRENCY_TOLERANCE));
    }

    #[test]
    fn test_discrepancy_zero_when_matched() {
        assert_eq!(discrepancy("x", dec!(5), dec!(3), true).unwrap(), Decimal::ZERO);
        assert_eq!(discrepancy("x", dec!(3), dec!(5), false).unwrap(), dec!(2));
    }

    #[test]
    fn test_sum_overflow_names_the_field() {
        let err = sum_money("total_assets", vec![Decimal::MAX, dec!(1)]).unwrap_err();
        match err {
            ReportCheckError::InvalidInput { field, .. } => assert_eq!(field, "total_assets"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ratio_overflow_is_an_error() {
        assert!(safe_ratio("gross_margin", Decimal::MAX, dec!(0.01)).is_err());
    }

    #[test]
    fn test_unrepresentable_gap_is_outside_tolerance() {
        assert!(!within_tolerance(Decimal::MAX, Decimal::MIN, CURRENCY_TOLERANCE));
        assert!(discrepancy("x", Decimal::MAX, Decimal::MIN, false).is_err());
    }

    proptest! {
        #[test]
        fn prop_to_money_is_idempotent(
            mantissa in -1_000_000_000_000i64..1_000_000_000_000,
            scale in 0u32..10,
        ) {
            let value = Decimal::new(mantissa, scale);
            let once = to_money(value);
            prop_assert_eq!(to_money(once), once);
        }
    }
}
