use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ReportCheckError;
use crate::types::Timestamp;
use crate::validators::{
    balance_sheet, burn_rate, cash_flow, profit_loss, receivables, trial_balance,
};
use crate::ReportCheckResult;

/// Every report the engine knows how to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    ProfitLoss,
    BalanceSheet,
    TrialBalance,
    CashFlow,
    BurnRate,
    AccountsReceivable,
    AccountsPayable,
}

impl ReportType {
    /// Accepted names, aliases included, in the order they are listed to users.
    pub const NAMES: &'static [&'static str] = &[
        "pnl",
        "profit_loss",
        "balance_sheet",
        "trial_balance",
        "cash_flow",
        "burn_rate",
        "ar",
        "accounts_receivable",
        "ap",
        "accounts_payable",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::ProfitLoss => "profit_loss",
            ReportType::BalanceSheet => "balance_sheet",
            ReportType::TrialBalance => "trial_balance",
            ReportType::CashFlow => "cash_flow",
            ReportType::BurnRate => "burn_rate",
            ReportType::AccountsReceivable => "accounts_receivable",
            ReportType::AccountsPayable => "accounts_payable",
        }
    }
}

impl FromStr for ReportType {
    type Err = ReportCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pnl" | "profit_loss" => Ok(ReportType::ProfitLoss),
            "balance_sheet" => Ok(ReportType::BalanceSheet),
            "trial_balance" => Ok(ReportType::TrialBalance),
            "cash_flow" => Ok(ReportType::CashFlow),
            "burn_rate" => Ok(ReportType::BurnRate),
            "ar" | "accounts_receivable" => Ok(ReportType::AccountsReceivable),
            "ap" | "accounts_payable" => Ok(ReportType::AccountsPayable),
            other => Err(ReportCheckError::UnknownReportType(other.to_string())),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict with its report-specific shape erased, ready for output.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub report_type: ReportType,
    pub valid: bool,
    pub verdict: Value,
}

fn outcome<T: Serialize>(
    report_type: ReportType,
    valid: bool,
    verdict: &T,
) -> ReportCheckResult<ValidationOutcome> {
    Ok(ValidationOutcome {
        report_type,
        valid,
        verdict: serde_json::to_value(verdict)?,
    })
}

/// Validate a raw report document.
///
/// `as_of` pins the reference time for the aging reports; other report
/// types ignore it. Fails when the document does not fit the report's
/// schema or a recomputed figure is out of range.
pub fn validate_document(
    report_type: ReportType,
    document: &Value,
    as_of: Option<Timestamp>,
) -> ReportCheckResult<ValidationOutcome> {
    debug!(%report_type, "validating document");
    match report_type {
        ReportType::ProfitLoss => {
            let v = profit_loss::validate_profit_loss(document)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::BalanceSheet => {
            let v = balance_sheet::validate_balance_sheet(document)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::TrialBalance => {
            let v = trial_balance::validate_trial_balance(document)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::CashFlow => {
            let v = cash_flow::validate_cash_flow(document)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::BurnRate => {
            let v = burn_rate::validate_burn_rate(document)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::AccountsReceivable => {
            let v = receivables::validate_accounts_receivable(document, as_of)?;
            outcome(report_type, v.valid, &v)
        }
        ReportType::AccountsPayable => {
            let v = receivables::validate_accounts_payable(document, as_of)?;
            outcome(report_type, v.valid, &v)
        }
    }
}
