use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{figure_matches, flag_matches, parse_document, Verdict};
use crate::calculators::trial_balance::{calculate_trial_balance, TrialBalanceCalculation};
use crate::money::{discrepancy, CURRENCY_TOLERANCE};
use crate::types::{JournalEntry, Money};
use crate::ReportCheckResult;

const REPORT: &str = "trial_balance";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBalanceTotals {
    pub debits: Money,
    pub credits: Money,
}

/// Trial balance report as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrialBalanceDocument {
    pub entries: Vec<JournalEntry>,
    pub totals: TrialBalanceTotals,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceReported {
    #[serde(with = "rust_decimal::serde::float")]
    pub debits: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub credits: Money,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceDiscrepancies {
    #[serde(with = "rust_decimal::serde::float")]
    pub debits: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub credits: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Money,
}

pub type TrialBalanceVerdict =
    Verdict<TrialBalanceCalculation, TrialBalanceReported, TrialBalanceDiscrepancies>;

pub fn verify_trial_balance(doc: &TrialBalanceDocument) -> ReportCheckResult<TrialBalanceVerdict> {
    let calculated = calculate_trial_balance(&doc.entries)?;
    debug!(report = REPORT, entries = doc.entries.len(), ?calculated, "recomputed");

    let debits_match = figure_matches(
        REPORT,
        "total_debits",
        calculated.total_debits,
        doc.totals.debits,
        CURRENCY_TOLERANCE,
    );
    let credits_match = figure_matches(
        REPORT,
        "total_credits",
        calculated.total_credits,
        doc.totals.credits,
        CURRENCY_TOLERANCE,
    );
    let balance_match =
        flag_matches(REPORT, "is_balanced", calculated.is_balanced, doc.is_balanced);

    let discrepancies = TrialBalanceDiscrepancies {
        debits: discrepancy(
            "total_debits",
            calculated.total_debits,
            doc.totals.debits,
            debits_match,
        )?,
        credits: discrepancy(
            "total_credits",
            calculated.total_credits,
            doc.totals.credits,
            credits_match,
        )?,
        balance: if balance_match {
            Decimal::ZERO
        } else {
            calculated.difference
        },
    };

    Ok(Verdict {
        valid: debits_match && credits_match && balance_match,
        calculated,
        reported: TrialBalanceReported {
            debits: doc.totals.debits,
            credits: doc.totals.credits,
            is_balanced: doc.is_balanced,
        },
        discrepancies,
    })
}

pub fn validate_trial_balance(document: &Value) -> ReportCheckResult<TrialBalanceVerdict> {
    let doc: TrialBalanceDocument = parse_document(REPORT, document)?;
    verify_trial_balance(&doc)
}
