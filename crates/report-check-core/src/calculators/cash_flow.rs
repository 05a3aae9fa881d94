use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{add, sub, to_money};
use crate::types::Money;
use crate::ReportCheckResult;

/// Operating section of an indirect-method cash flow statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowCalculation {
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Money,
    /// Cash effect of the change in current assets. An increase in assets
    /// consumes cash, so this is the negated balance change.
    #[serde(with = "rust_decimal::serde::float")]
    pub change_in_current_assets: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub change_in_current_liabilities: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_from_operations: Money,
}

/// Cash from operations by the indirect method:
/// `net_income - Δassets + Δliabilities`.
pub fn calculate_cash_flow(
    net_income: Decimal,
    change_in_assets: Decimal,
    change_in_liabilities: Decimal,
) -> ReportCheckResult<CashFlowCalculation> {
    let net_income = to_money(net_income);
    let change_in_assets = to_money(change_in_assets);
    let change_in_liabilities = to_money(change_in_liabilities);
    let cash_from_operations = add(
        "cash_from_operations",
        sub("cash_from_operations", net_income, change_in_assets)?,
        change_in_liabilities,
    )?;

    Ok(CashFlowCalculation {
        net_income,
        change_in_current_assets: -change_in_assets,
        change_in_current_liabilities: change_in_liabilities,
        cash_from_operations,
    })
}

/// Net change in cash across the three activity sections.
pub fn calculate_net_change_in_cash(
    operating: Decimal,
    investing: Decimal,
    financing: Decimal,
) -> ReportCheckResult<Money> {
    let subtotal = add("net_change_in_cash", to_money(operating), to_money(investing))?;
    add("net_change_in_cash", subtotal, to_money(financing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_increase_reduces_cash() {
        let cf = calculate_cash_flow(dec!(1000), dec!(200), dec!(50)).unwrap();
        assert_eq!(cf.change_in_current_assets, dec!(-200));
        assert_eq!(cf.change_in_current_liabilities, dec!(50));
        assert_eq!(cf.cash_from_operations, dec!(850));
    }

    #[test]
    fn test_asset_decrease_releases_cash() {
        let cf = calculate_cash_flow(dec!(500), dec!(-100), Decimal::ZERO).unwrap();
        assert_eq!(cf.change_in_current_assets, dec!(100));
        assert_eq!(cf.cash_from_operations, dec!(600));
    }

    #[test]
    fn test_net_change_sums_sections() {
        assert_eq!(
            calculate_net_change_in_cash(dec!(850), dec!(-300), dec!(100.004)).unwrap(),
            dec!(650.00)
        );
    }

    #[test]
    fn test_operating_cash_out_of_range() {
        let huge = dec!(50_000_000_000_000_000_000_000_000_000);
        let err = calculate_cash_flow(huge, -huge, Decimal::ZERO).unwrap_err();
        assert!(err.to_string().contains("cash_from_operations"));
    }
}
