use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{figure_matches, flag_matches, parse_document, Verdict};
use crate::calculators::balance_sheet::{calculate_balance_sheet, BalanceSheetCalculation};
use crate::money::{discrepancy, CURRENCY_TOLERANCE};
use crate::types::{LineItem, Money};
use crate::ReportCheckResult;

const REPORT: &str = "balance_sheet";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSection {
    pub items: Vec<LineItem>,
    pub total: Money,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EquitySection {
    pub items: Vec<LineItem>,
    pub retained_earnings: Money,
}

/// Balance sheet report as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BalanceSheetDocument {
    pub assets: ItemSection,
    pub liabilities: ItemSection,
    pub equity: EquitySection,
    pub total_liabilities_and_equity: Money,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReported {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_assets: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities_and_equity: Money,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetDiscrepancies {
    #[serde(with = "rust_decimal::serde::float")]
    pub assets: Money,
    /// Recomputed gap between the two sides, when the reported balanced
    /// flag disagrees with the recomputed one.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Money,
}

pub type BalanceSheetVerdict =
    Verdict<BalanceSheetCalculation, BalanceSheetReported, BalanceSheetDiscrepancies>;

/// Check the reported asset total and the reported balanced flag.
///
/// The reported liabilities-and-equity total is echoed but not compared;
/// the balanced flag already covers that side of the equation.
pub fn verify_balance_sheet(doc: &BalanceSheetDocument) -> ReportCheckResult<BalanceSheetVerdict> {
    let calculated = calculate_balance_sheet(
        &doc.assets.items,
        &doc.liabilities.items,
        &doc.equity.items,
        doc.equity.retained_earnings,
    )?;
    debug!(report = REPORT, ?calculated, "recomputed");

    let assets_match = figure_matches(
        REPORT,
        "total_assets",
        calculated.total_assets,
        doc.assets.total,
        CURRENCY_TOLERANCE,
    );
    let balance_match =
        flag_matches(REPORT, "is_balanced", calculated.is_balanced, doc.is_balanced);

    let discrepancies = BalanceSheetDiscrepancies {
        assets: discrepancy(
            "total_assets",
            calculated.total_assets,
            doc.assets.total,
            assets_match,
        )?,
        balance: if balance_match {
            Decimal::ZERO
        } else {
            calculated.difference
        },
    };

    Ok(Verdict {
        valid: assets_match && balance_match,
        calculated,
        reported: BalanceSheetReported {
            total_assets: doc.assets.total,
            total_liabilities_and_equity: doc.total_liabilities_and_equity,
            is_balanced: doc.is_balanced,
        },
        discrepancies,
    })
}

pub fn validate_balance_sheet(document: &Value) -> ReportCheckResult<BalanceSheetVerdict> {
    let doc: BalanceSheetDocument = parse_document(REPORT, document)?;
    verify_balance_sheet(&doc)
}
