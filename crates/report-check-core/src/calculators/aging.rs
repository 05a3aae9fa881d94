use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReportCheckError;
use crate::money::{add, to_money, MS_PER_DAY};
use crate::types::{AgingTransaction, Money, Timestamp};
use crate::ReportCheckResult;

/// Open balances grouped by age in days. Boundaries are inclusive on the
/// upper end: 30 days old is `0-30`, 31 days old is `31-60`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgingBuckets {
    #[serde(rename = "0-30", with = "rust_decimal::serde::float")]
    pub current: Money,
    #[serde(rename = "31-60", with = "rust_decimal::serde::float")]
    pub days_31_60: Money,
    #[serde(rename = "61-90", with = "rust_decimal::serde::float")]
    pub days_61_90: Money,
    #[serde(rename = "90+", with = "rust_decimal::serde::float")]
    pub over_90: Money,
}

impl AgingBuckets {
    pub fn total(&self) -> ReportCheckResult<Money> {
        [self.days_31_60, self.days_61_90, self.over_90]
            .into_iter()
            .try_fold(self.current, |acc, v| add("total_outstanding", acc, v))
    }

    fn bucket_for(&mut self, days_old: Decimal) -> &mut Money {
        if days_old <= Decimal::from(30) {
            &mut self.current
        } else if days_old <= Decimal::from(60) {
            &mut self.days_31_60
        } else if days_old <= Decimal::from(90) {
            &mut self.days_61_90
        } else {
            &mut self.over_90
        }
    }
}

/// Fractional days between `date` and `as_of`. Future-dated items come out
/// negative and age into the first bucket.
pub fn days_old(date: Timestamp, as_of: Timestamp) -> ReportCheckResult<Decimal> {
    let elapsed = as_of
        .checked_sub(date)
        .ok_or_else(|| ReportCheckError::InvalidInput {
            field: "date".into(),
            reason: format!("timestamp {date} is too far from the reference time {as_of}"),
        })?;
    Ok(Decimal::from(elapsed) / Decimal::from(MS_PER_DAY))
}

/// Reference time for aging when the caller does not pin one.
pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Bucket each transaction's absolute amount by age relative to `as_of`
/// (defaults to the current time).
pub fn calculate_aging_buckets(
    transactions: &[AgingTransaction],
    as_of: Option<Timestamp>,
) -> ReportCheckResult<AgingBuckets> {
    let as_of = as_of.unwrap_or_else(now_millis);
    let mut buckets = AgingBuckets::default();

    for tx in transactions {
        let amount = to_money(tx.amount.abs());
        let bucket = buckets.bucket_for(days_old(tx.date, as_of)?);
        *bucket = add("aging_buckets", *bucket, amount)?;
    }

    Ok(buckets)
}
