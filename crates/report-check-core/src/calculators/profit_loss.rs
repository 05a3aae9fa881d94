use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::money::{mul, safe_ratio, sub, to_money};
use crate::types::{Money, Rate};
use crate::ReportCheckResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossCalculation {
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Money,
    /// Net income as a percentage of revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin: Rate,
}

/// Net income and margin from top-line revenue and total expenses.
///
/// Zero (or negative) revenue yields a margin of exactly 0 rather than
/// "not applicable"; reports render an empty period as a 0% margin.
pub fn calculate_profit_loss(
    revenue: Decimal,
    expenses: Decimal,
) -> ReportCheckResult<ProfitLossCalculation> {
    let revenue = to_money(revenue);
    let expenses = to_money(expenses);
    let net_income = sub("net_income", revenue, expenses)?;

    let gross_margin = if revenue > Decimal::ZERO {
        match safe_ratio("gross_margin", net_income, revenue)? {
            Some(ratio) => mul("gross_margin", ratio, dec!(100))?,
            None => Decimal::ZERO,
        }
    } else {
        Decimal::ZERO
    };

    Ok(ProfitLossCalculation {
        revenue,
        expenses,
        net_income,
        gross_margin,
    })
}
