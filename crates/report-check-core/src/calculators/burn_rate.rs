use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{safe_ratio, sum_money, to_money};
use crate::types::{Money, Rate};
use crate::ReportCheckResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnRateCalculation {
    #[serde(with = "rust_decimal::serde::float")]
    pub average_monthly_burn: Money,
    /// Burn for the most recent month in the series.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_monthly_burn: Money,
    /// Months of cash left at the average burn. `None` when the company is
    /// not burning cash on average.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub runway_months: Option<Rate>,
}

/// Average burn and runway from a chronological series of monthly burns.
///
/// The average is kept at full precision; only the individual months and
/// the balance are rounded to cents.
pub fn calculate_burn_rate(
    monthly_burns: &[Decimal],
    current_balance: Decimal,
) -> ReportCheckResult<BurnRateCalculation> {
    let burns: Vec<Money> = monthly_burns.iter().copied().map(to_money).collect();
    let Some(&current_monthly_burn) = burns.last() else {
        return Ok(BurnRateCalculation {
            average_monthly_burn: Decimal::ZERO,
            current_monthly_burn: Decimal::ZERO,
            runway_months: None,
        });
    };

    let total_burn = sum_money("average_monthly_burn", burns.iter().copied())?;
    let average_burn = safe_ratio(
        "average_monthly_burn",
        total_burn,
        Decimal::from(burns.len()),
    )?
    .unwrap_or(Decimal::ZERO);

    let current_balance = to_money(current_balance);
    let runway_months = if average_burn > Decimal::ZERO {
        safe_ratio("runway_months", current_balance, average_burn)?
    } else {
        None
    };

    Ok(BurnRateCalculation {
        average_monthly_burn: average_burn,
        current_monthly_burn,
        runway_months,
    })
}
