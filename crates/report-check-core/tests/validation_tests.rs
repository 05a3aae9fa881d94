use pretty_assertions::assert_eq;
use report_check_core::calculators::{aging, balance_sheet, burn_rate, growth, profit_loss};
use report_check_core::money::{to_money, MS_PER_DAY};
use report_check_core::{
    validate_document, AgingTransaction, LineItem, ReportCheckError, ReportType,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

// ===========================================================================
// Profit & loss
// ===========================================================================

#[test]
fn test_profit_loss_end_to_end() {
    let outcome = validate_document(
        ReportType::ProfitLoss,
        &json!({
            "revenue": {"total": 1000},
            "expenses": {"total": 600},
            "netIncome": 400,
            "grossMargin": 40
        }),
        None,
    )
    .unwrap();

    assert!(outcome.valid);
    assert_eq!(
        outcome.verdict,
        json!({
            "valid": true,
            "calculated": {
                "revenue": 1000.0,
                "expenses": 600.0,
                "net_income": 400.0,
                "gross_margin": 40.0
            },
            "reported": {"net_income": 400.0, "gross_margin": 40.0},
            "discrepancies": {"net_income": 0.0, "gross_margin": 0.0}
        })
    );
}

#[test]
fn test_profit_loss_zero_revenue_margin_is_exactly_zero() {
    let pnl = profit_loss::calculate_profit_loss(Decimal::ZERO, dec!(1234.56)).unwrap();
    assert_eq!(pnl.gross_margin, Decimal::ZERO);
    assert_eq!(pnl.net_income, dec!(-1234.56));
}

// ===========================================================================
// Balance sheet
// ===========================================================================

#[test]
fn test_balance_sheet_end_to_end_unbalanced() {
    let outcome = validate_document(
        ReportType::BalanceSheet,
        &json!({
            "assets": {"items": [{"balance": 600}, {"balance": 400}], "total": 1000},
            "liabilities": {"items": [{"balance": 500}], "total": 500},
            "equity": {"items": [{"balance": 300}], "retainedEarnings": 100},
            "totalLiabilitiesAndEquity": 900,
            "isBalanced": true
        }),
        None,
    )
    .unwrap();

    assert!(!outcome.valid);
    assert_eq!(outcome.verdict["discrepancies"]["balance"], json!(100.0));
    assert_eq!(outcome.verdict["discrepancies"]["assets"], json!(0.0));
    assert_eq!(outcome.verdict["calculated"]["is_balanced"], json!(false));
}

#[test]
fn test_balance_sheet_equation_within_half_cent_balances() {
    let assets = vec![LineItem { balance: dec!(1000.004) }];
    let liabilities = vec![LineItem { balance: dec!(400) }];
    let equity = vec![LineItem { balance: dec!(500) }];
    let calc =
        balance_sheet::calculate_balance_sheet(&assets, &liabilities, &equity, dec!(100)).unwrap();
    assert!(calc.is_balanced);
    assert!(calc.difference < dec!(0.01));
}

// ===========================================================================
// Trial balance
// ===========================================================================

#[test]
fn test_trial_balance_end_to_end() {
    let outcome = validate_document(
        ReportType::TrialBalance,
        &json!({
            "entries": [{"debit": 100, "credit": 0}, {"debit": 0, "credit": 100}],
            "totals": {"debits": 100, "credits": 100},
            "isBalanced": true
        }),
        None,
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.verdict["calculated"]["difference"], json!(0.0));
}

// ===========================================================================
// Burn rate
// ===========================================================================

#[test]
fn test_burn_rate_empty_series() {
    let calc = burn_rate::calculate_burn_rate(&[], dec!(100_000)).unwrap();
    assert_eq!(calc.average_monthly_burn, Decimal::ZERO);
    assert_eq!(calc.runway_months, None);
}

#[test]
fn test_burn_rate_not_applicable_serializes_as_null() {
    let outcome = validate_document(
        ReportType::BurnRate,
        &json!({"monthlyBurns": [], "endingBalance": 1000, "averageMonthlyBurn": 0}),
        None,
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.verdict["calculated"]["runway_months"], json!(null));
    assert_eq!(outcome.verdict["reported"]["runway_months"], json!(null));
}

// ===========================================================================
// Aging
// ===========================================================================

#[test]
fn test_aging_boundary_days() {
    let as_of = 1_700_000_000_000;
    let transactions = vec![
        AgingTransaction {
            date: as_of - 30 * MS_PER_DAY,
            amount: dec!(100),
        },
        AgingTransaction {
            date: as_of - 31 * MS_PER_DAY,
            amount: dec!(-40),
        },
    ];
    let buckets = aging::calculate_aging_buckets(&transactions, Some(as_of)).unwrap();
    assert_eq!(buckets.current, dec!(100));
    assert_eq!(buckets.days_31_60, dec!(40));
    assert_eq!(buckets.total().unwrap(), dec!(140));
}

#[test]
fn test_receivables_end_to_end_with_pinned_reference_time() {
    let as_of: i64 = 1_717_200_000_000;
    let outcome = validate_document(
        ReportType::AccountsReceivable,
        &json!({
            "customers": [
                {"customer": "A", "totalOwed": 500, "oldestTransaction": as_of - 5 * MS_PER_DAY},
                {"customer": "B", "totalOwed": 300, "oldestTransaction": as_of - 95 * MS_PER_DAY}
            ],
            "agingBuckets": {"0-30": 500, "31-60": 0, "61-90": 0, "90+": 300},
            "totalOutstanding": 800
        }),
        Some(as_of),
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(
        outcome.verdict["calculated"]["aging_buckets"],
        json!({"0-30": 500.0, "31-60": 0.0, "61-90": 0.0, "90+": 300.0})
    );
}

// ===========================================================================
// Growth and rounding
// ===========================================================================

#[test]
fn test_growth_rate() {
    assert_eq!(growth::calculate_growth_rate(dec!(150), dec!(100)).unwrap(), Some(dec!(50)));
    assert_eq!(growth::calculate_growth_rate(dec!(150), Decimal::ZERO).unwrap(), None);
}

#[test]
fn test_to_money_idempotent_on_samples() {
    for value in [dec!(0.005), dec!(-0.005), dec!(1234.5678), dec!(99.995)] {
        assert_eq!(to_money(to_money(value)), to_money(value));
    }
}

// ===========================================================================
// Errors
// ===========================================================================

#[test]
fn test_non_numeric_amount_is_fatal() {
    let err = validate_document(
        ReportType::TrialBalance,
        &json!({"entries": [{"debit": "one hundred"}]}),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ReportCheckError::MalformedDocument { .. }));
}

#[test]
fn test_boolean_amount_is_fatal() {
    let err =
        validate_document(ReportType::ProfitLoss, &json!({"netIncome": true}), None).unwrap_err();
    assert!(err.to_string().starts_with("Malformed profit_loss document"));
}

fn invalid_field(err: ReportCheckError) -> String {
    match err {
        ReportCheckError::InvalidInput { field, .. } => field,
        other => panic!("expected invalid input, got {other}"),
    }
}

#[test]
fn test_asset_total_beyond_decimal_range_is_invalid_input() {
    let err = validate_document(
        ReportType::BalanceSheet,
        &json!({"assets": {"items": [{"balance": 5e28}, {"balance": 5e28}]}}),
        None,
    )
    .unwrap_err();
    assert_eq!(invalid_field(err), "total_assets");
}

#[test]
fn test_margin_beyond_decimal_range_is_invalid_input() {
    let err = validate_document(
        ReportType::ProfitLoss,
        &json!({"revenue": {"total": 0.01}, "expenses": {"total": 5e28}}),
        None,
    )
    .unwrap_err();
    assert_eq!(invalid_field(err), "gross_margin");
}

#[test]
fn test_extreme_transaction_date_is_invalid_input() {
    let err = validate_document(
        ReportType::AccountsReceivable,
        &json!({"customers": [{"totalOwed": 10, "oldestTransaction": i64::MIN}]}),
        Some(1_700_000_000_000),
    )
    .unwrap_err();
    assert_eq!(invalid_field(err), "date");
}
