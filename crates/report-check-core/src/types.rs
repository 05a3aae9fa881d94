use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages and ratios (gross margin, runway months, growth).
/// Expressed as percentages where the report does (40 = 40%).
pub type Rate = Decimal;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// A generic ledger entry. Its category (asset, liability, equity) is
/// implied by the collection it appears in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub balance: Money,
}

/// One line of a trial balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    pub debit: Money,
    pub credit: Money,
}

/// An open amount to be aged against a reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingTransaction {
    pub date: Timestamp,
    pub amount: Money,
}
