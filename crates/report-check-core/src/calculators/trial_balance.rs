use serde::{Deserialize, Serialize};

use crate::money::{sub, sum_money, to_money, BALANCE_THRESHOLD};
use crate::types::{JournalEntry, Money};
use crate::ReportCheckResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceCalculation {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_debits: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_credits: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Money,
    pub is_balanced: bool,
}

/// Sum debits and credits across all entries. Each side of each entry is
/// rounded to cents before it is added.
pub fn calculate_trial_balance(
    entries: &[JournalEntry],
) -> ReportCheckResult<TrialBalanceCalculation> {
    let total_debits = sum_money("total_debits", entries.iter().map(|e| to_money(e.debit)))?;
    let total_credits = sum_money("total_credits", entries.iter().map(|e| to_money(e.credit)))?;
    let difference = sub("difference", total_debits, total_credits)?.abs();

    Ok(TrialBalanceCalculation {
        total_debits,
        total_credits,
        difference,
        is_balanced: difference < BALANCE_THRESHOLD,
    })
}
