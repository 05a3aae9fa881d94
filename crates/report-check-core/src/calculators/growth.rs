use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::money::{mul, safe_ratio, sub, to_money};
use crate::types::Rate;
use crate::ReportCheckResult;

/// Period-over-period growth as a percentage, rounded to two places.
/// Growth from a zero base is not applicable.
pub fn calculate_growth_rate(
    current: Decimal,
    previous: Decimal,
) -> ReportCheckResult<Option<Rate>> {
    let change = sub("growth_rate", current, previous)?;
    match safe_ratio("growth_rate", change, previous)? {
        Some(ratio) => Ok(Some(to_money(mul("growth_rate", ratio, dec!(100))?))),
        None => Ok(None),
    }
}
