use clap::Args;
use tracing::debug;

use report_check_core::{validate_document, ReportType, Timestamp, ValidationOutcome};

use crate::input;

/// Arguments for validating one report document
#[derive(Args)]
pub struct ValidateArgs {
    /// Report type (pnl, profit_loss, balance_sheet, trial_balance, cash_flow,
    /// burn_rate, ar, accounts_receivable, ap, accounts_payable)
    pub report_type: ReportType,

    /// Path to the report document (JSON, or YAML by extension); `-` reads
    /// JSON or YAML from stdin
    pub file: String,

    /// Reference time for aging reports, in milliseconds since the epoch
    /// (defaults to now)
    #[arg(long, allow_hyphen_values = true)]
    pub as_of: Option<Timestamp>,
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome, Box<dyn std::error::Error>> {
    let document = if args.file == "-" {
        input::stdin::read_stdin()?.ok_or("no report document piped on stdin")?
    } else {
        input::file::read_document(&args.file)?
    };
    debug!(report_type = %args.report_type, file = %args.file, "loaded document");

    let outcome = validate_document(args.report_type, &document, args.as_of)?;
    Ok(outcome)
}
