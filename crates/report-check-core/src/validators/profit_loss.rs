use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{figure_matches, parse_document, Verdict};
use crate::calculators::profit_loss::{calculate_profit_loss, ProfitLossCalculation};
use crate::money::{discrepancy, CURRENCY_TOLERANCE, RATIO_TOLERANCE};
use crate::types::{Money, Rate};
use crate::ReportCheckResult;

const REPORT: &str = "profit_loss";

/// A section of the statement that only carries a total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTotal {
    pub total: Money,
}

/// Profit & loss report as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfitLossDocument {
    pub revenue: SectionTotal,
    pub expenses: SectionTotal,
    pub net_income: Money,
    pub gross_margin: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossReported {
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossDiscrepancies {
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin: Rate,
}

pub type ProfitLossVerdict =
    Verdict<ProfitLossCalculation, ProfitLossReported, ProfitLossDiscrepancies>;

/// Check reported net income (to the cent) and gross margin (to 0.1 points).
pub fn verify_profit_loss(doc: &ProfitLossDocument) -> ReportCheckResult<ProfitLossVerdict> {
    let calculated = calculate_profit_loss(doc.revenue.total, doc.expenses.total)?;
    debug!(report = REPORT, ?calculated, "recomputed");

    let net_income_match = figure_matches(
        REPORT,
        "net_income",
        calculated.net_income,
        doc.net_income,
        CURRENCY_TOLERANCE,
    );
    let margin_match = figure_matches(
        REPORT,
        "gross_margin",
        calculated.gross_margin,
        doc.gross_margin,
        RATIO_TOLERANCE,
    );

    let discrepancies = ProfitLossDiscrepancies {
        net_income: discrepancy(
            "net_income",
            calculated.net_income,
            doc.net_income,
            net_income_match,
        )?,
        gross_margin: discrepancy(
            "gross_margin",
            calculated.gross_margin,
            doc.gross_margin,
            margin_match,
        )?,
    };

    Ok(Verdict {
        valid: net_income_match && margin_match,
        calculated,
        reported: ProfitLossReported {
            net_income: doc.net_income,
            gross_margin: doc.gross_margin,
        },
        discrepancies,
    })
}

pub fn validate_profit_loss(document: &Value) -> ReportCheckResult<ProfitLossVerdict> {
    let doc: ProfitLossDocument = parse_document(REPORT, document)?;
    verify_profit_loss(&doc)
}
