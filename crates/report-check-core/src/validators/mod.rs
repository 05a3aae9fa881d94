//! Compare reported figures against independently recomputed ones.
//!
//! Each validator reads its report's document through a typed schema in
//! which every field has a default, so absent data never fails a run. Data
//! of the wrong shape (a non-numeric string where an amount belongs, an
//! array where an object belongs) is rejected, as are figures whose totals
//! or ratios leave the decimal range.

pub mod balance_sheet;
pub mod burn_rate;
pub mod cash_flow;
pub mod profit_loss;
pub mod receivables;
pub mod trial_balance;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::ReportCheckError;
use crate::money::within_tolerance;
use crate::ReportCheckResult;

/// Outcome of validating one report.
///
/// `valid` is the conjunction of every field check for the report type.
/// A discrepancy is nonzero only for a field whose check failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict<C, R, D> {
    pub valid: bool,
    pub calculated: C,
    pub reported: R,
    pub discrepancies: D,
}

/// Deserialize a report document into its schema.
pub(crate) fn parse_document<T: DeserializeOwned>(
    report: &str,
    document: &Value,
) -> ReportCheckResult<T> {
    T::deserialize(document).map_err(|e| ReportCheckError::MalformedDocument {
        report: report.to_string(),
        reason: e.to_string(),
    })
}

/// Tolerance comparison that records the failing field.
pub(crate) fn figure_matches(
    report: &str,
    field: &str,
    calculated: Decimal,
    reported: Decimal,
    tolerance: Decimal,
) -> bool {
    let matched = within_tolerance(calculated, reported, tolerance);
    if !matched {
        info!(report, field, %calculated, %reported, %tolerance, "figure outside tolerance");
    }
    matched
}

pub(crate) fn flag_matches(report: &str, field: &str, calculated: bool, reported: bool) -> bool {
    let matched = calculated == reported;
    if !matched {
        info!(report, field, calculated, reported, "flag disagrees");
    }
    matched
}
