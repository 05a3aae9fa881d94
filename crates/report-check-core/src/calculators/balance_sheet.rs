use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{add, sub, sum_money, to_money, BALANCE_THRESHOLD};
use crate::types::{LineItem, Money};
use crate::ReportCheckResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetCalculation {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_assets: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_equity: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities_and_equity: Money,
    /// `|assets - (liabilities + equity)|`
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Money,
    pub is_balanced: bool,
}

fn total(field: &str, items: &[LineItem]) -> ReportCheckResult<Decimal> {
    sum_money(field, items.iter().map(|item| item.balance))
}

/// Totals each side of the balance sheet and tests the accounting
/// equation. Retained earnings sit outside the equity line items and are
/// folded into total equity here.
pub fn calculate_balance_sheet(
    assets: &[LineItem],
    liabilities: &[LineItem],
    equity: &[LineItem],
    retained_earnings: Decimal,
) -> ReportCheckResult<BalanceSheetCalculation> {
    let total_assets = to_money(total("total_assets", assets)?);
    let total_liabilities = to_money(total("total_liabilities", liabilities)?);
    let total_equity = to_money(add(
        "total_equity",
        total("total_equity", equity)?,
        retained_earnings,
    )?);
    let total_liabilities_and_equity =
        add("total_liabilities_and_equity", total_liabilities, total_equity)?;
    let difference = sub("difference", total_assets, total_liabilities_and_equity)?.abs();

    Ok(BalanceSheetCalculation {
        total_assets,
        total_liabilities,
        total_equity,
        total_liabilities_and_equity,
        difference,
        is_balanced: difference < BALANCE_THRESHOLD,
    })
}
