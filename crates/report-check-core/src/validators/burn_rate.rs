use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{figure_matches, parse_document, Verdict};
use crate::calculators::burn_rate::{calculate_burn_rate, BurnRateCalculation};
use crate::money::{discrepancy, optional_within_tolerance, CURRENCY_TOLERANCE, RATIO_TOLERANCE};
use crate::types::{Money, Rate};
use crate::ReportCheckResult;

const REPORT: &str = "burn_rate";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyBurn {
    pub burn: Money,
}

/// Burn rate & runway report as produced upstream. Months are listed in
/// chronological order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BurnRateDocument {
    pub monthly_burns: Vec<MonthlyBurn>,
    pub ending_balance: Money,
    pub average_monthly_burn: Money,
    /// Absent or `null` when the report found runway not applicable.
    pub runway_months: Option<Rate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnRateReported {
    #[serde(with = "rust_decimal::serde::float")]
    pub average_monthly_burn: Money,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub runway_months: Option<Rate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnRateDiscrepancies {
    #[serde(with = "rust_decimal::serde::float")]
    pub average_burn: Money,
    /// 0 when only one side considers runway applicable, since there is no
    /// numeric gap to report. `valid` still records the disagreement.
    #[serde(with = "rust_decimal::serde::float")]
    pub runway: Rate,
}

pub type BurnRateVerdict = Verdict<BurnRateCalculation, BurnRateReported, BurnRateDiscrepancies>;

fn runway_discrepancy(
    calculated: Option<Rate>,
    reported: Option<Rate>,
    matched: bool,
) -> ReportCheckResult<Rate> {
    match (calculated, reported) {
        (Some(c), Some(r)) => discrepancy("runway_months", c, r, matched),
        _ => Ok(Decimal::ZERO),
    }
}

/// Check the average burn (to the cent) and runway (to 0.1 months). A
/// runway both sides consider not applicable counts as a match.
pub fn verify_burn_rate(doc: &BurnRateDocument) -> ReportCheckResult<BurnRateVerdict> {
    let burns: Vec<Money> = doc.monthly_burns.iter().map(|m| m.burn).collect();
    let calculated = calculate_burn_rate(&burns, doc.ending_balance)?;
    debug!(report = REPORT, months = burns.len(), ?calculated, "recomputed");

    let avg_match = figure_matches(
        REPORT,
        "average_monthly_burn",
        calculated.average_monthly_burn,
        doc.average_monthly_burn,
        CURRENCY_TOLERANCE,
    );
    let runway_match =
        optional_within_tolerance(calculated.runway_months, doc.runway_months, RATIO_TOLERANCE);
    if !runway_match {
        info!(
            report = REPORT,
            field = "runway_months",
            calculated = ?calculated.runway_months,
            reported = ?doc.runway_months,
            "runway disagrees"
        );
    }

    let discrepancies = BurnRateDiscrepancies {
        average_burn: discrepancy(
            "average_monthly_burn",
            calculated.average_monthly_burn,
            doc.average_monthly_burn,
            avg_match,
        )?,
        runway: runway_discrepancy(calculated.runway_months, doc.runway_months, runway_match)?,
    };

    Ok(Verdict {
        valid: avg_match && runway_match,
        calculated,
        reported: BurnRateReported {
            average_monthly_burn: doc.average_monthly_burn,
            runway_months: doc.runway_months,
        },
        discrepancies,
    })
}

pub fn validate_burn_rate(document: &Value) -> ReportCheckResult<BurnRateVerdict> {
    let doc: BurnRateDocument = parse_document(REPORT, document)?;
    verify_burn_rate(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_consistent_runway() {
        let verdict = validate_burn_rate(&json!({
            "monthlyBurns": [
                {"month": "2024-01", "burn": 10000},
                {"month": "2024-02", "burn": 12000},
                {"month": "2024-03", "burn": 14000}
            ],
            "endingBalance": 120000,
            "averageMonthlyBurn": 12000,
            "runwayMonths": 10.04
        }))
        .unwrap();
        assert!(verdict.valid);
        assert_eq!(verdict.calculated.current_monthly_burn, dec!(14000));
        assert_eq!(verdict.discrepancies.runway, Decimal::ZERO);
    }

    #[test]
    fn test_both_runways_not_applicable() {
        let verdict = validate_burn_rate(&json!({
            "monthlyBurns": [],
            "endingBalance": 50000,
            "averageMonthlyBurn": 0,
            "runwayMonths": null
        }))
        .unwrap();
        assert!(verdict.valid);
        assert_eq!(verdict.calculated.runway_months, None);
    }

    #[test]
    fn test_reported_runway_when_not_applicable() {
        let verdict = validate_burn_rate(&json!({
            "monthlyBurns": [{"burn": -500}],
            "endingBalance": 50000,
            "averageMonthlyBurn": -500,
            "runwayMonths": 100
        }))
        .unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.discrepancies.average_burn, Decimal::ZERO);
        assert_eq!(verdict.discrepancies.runway, Decimal::ZERO);
    }

    #[test]
    fn test_runway_outside_tolerance() {
        let verdict = validate_burn_rate(&json!({
            "monthlyBurns": [{"burn": 1000}, {"burn": 1000}],
            "endingBalance": 12000,
            "averageMonthlyBurn": 1000,
            "runwayMonths": 11.5
        }))
        .unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.discrepancies.runway, dec!(0.5));
    }

    #[test]
    fn test_missing_runway_means_not_applicable() {
        let verdict = validate_burn_rate(&json!({
            "monthlyBurns": [{"burn": 1000}],
            "endingBalance": 5000,
            "averageMonthlyBurn": 1000
        }))
        .unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.calculated.runway_months, Some(dec!(5)));
        assert_eq!(verdict.discrepancies.runway, Decimal::ZERO);
    }

    #[test]
    fn test_runway_out_of_range_is_rejected() {
        let err = validate_burn_rate(&json!({
            "monthlyBurns": [{"burn": 0.01}],
            "endingBalance": 5e28,
            "averageMonthlyBurn": 0.01
        }))
        .unwrap_err();
        assert!(matches!(err, crate::ReportCheckError::InvalidInput { .. }));
    }
}
