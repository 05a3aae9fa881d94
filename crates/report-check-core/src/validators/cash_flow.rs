use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{figure_matches, parse_document, Verdict};
use crate::calculators::cash_flow::{
    calculate_cash_flow, calculate_net_change_in_cash, CashFlowCalculation,
};
use crate::money::{discrepancy, to_money, CURRENCY_TOLERANCE};
use crate::types::Money;
use crate::ReportCheckResult;

const REPORT: &str = "cash_flow";

/// Working-capital adjustments as they appear on the statement: the asset
/// change is already sign-flipped to its cash effect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingCapitalAdjustments {
    pub change_in_current_assets: Money,
    pub change_in_current_liabilities: Money,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatingActivities {
    pub net_income: Money,
    pub adjustments: WorkingCapitalAdjustments,
    pub cash_from_operations: Money,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestingActivities {
    pub cash_from_investing: Money,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancingActivities {
    pub cash_from_financing: Money,
}

/// Indirect-method cash flow statement as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashFlowDocument {
    pub operating_activities: OperatingActivities,
    pub investing_activities: InvestingActivities,
    pub financing_activities: FinancingActivities,
    pub net_change_in_cash: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    #[serde(flatten)]
    pub operating: CashFlowCalculation,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_from_investing: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_from_financing: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_change_in_cash: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowReported {
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_from_operations: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_change_in_cash: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowDiscrepancies {
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_from_operations: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_change_in_cash: Money,
}

pub type CashFlowVerdict = Verdict<CashFlowSummary, CashFlowReported, CashFlowDiscrepancies>;

/// Recompute operating cash from net income and working-capital changes,
/// then roll it up with the investing and financing totals.
pub fn verify_cash_flow(doc: &CashFlowDocument) -> ReportCheckResult<CashFlowVerdict> {
    let operating_doc = &doc.operating_activities;
    // The statement shows the cash effect (-Δassets); undo that to get Δassets.
    let change_in_assets = -operating_doc.adjustments.change_in_current_assets;

    let operating = calculate_cash_flow(
        operating_doc.net_income,
        change_in_assets,
        operating_doc.adjustments.change_in_current_liabilities,
    )?;
    let net_change_in_cash = calculate_net_change_in_cash(
        operating.cash_from_operations,
        doc.investing_activities.cash_from_investing,
        doc.financing_activities.cash_from_financing,
    )?;
    let calculated = CashFlowSummary {
        operating,
        cash_from_investing: to_money(doc.investing_activities.cash_from_investing),
        cash_from_financing: to_money(doc.financing_activities.cash_from_financing),
        net_change_in_cash,
    };
    debug!(report = REPORT, ?calculated, "recomputed");

    let operations_match = figure_matches(
        REPORT,
        "cash_from_operations",
        calculated.operating.cash_from_operations,
        operating_doc.cash_from_operations,
        CURRENCY_TOLERANCE,
    );
    let net_change_match = figure_matches(
        REPORT,
        "net_change_in_cash",
        calculated.net_change_in_cash,
        doc.net_change_in_cash,
        CURRENCY_TOLERANCE,
    );

    let discrepancies = CashFlowDiscrepancies {
        cash_from_operations: discrepancy(
            "cash_from_operations",
            calculated.operating.cash_from_operations,
            operating_doc.cash_from_operations,
            operations_match,
        )?,
        net_change_in_cash: discrepancy(
            "net_change_in_cash",
            calculated.net_change_in_cash,
            doc.net_change_in_cash,
            net_change_match,
        )?,
    };

    Ok(Verdict {
        valid: operations_match && net_change_match,
        calculated,
        reported: CashFlowReported {
            cash_from_operations: operating_doc.cash_from_operations,
            net_change_in_cash: doc.net_change_in_cash,
        },
        discrepancies,
    })
}

pub fn validate_cash_flow(document: &Value) -> ReportCheckResult<CashFlowVerdict> {
    let doc: CashFlowDocument = parse_document(REPORT, document)?;
    verify_cash_flow(&doc)
}
