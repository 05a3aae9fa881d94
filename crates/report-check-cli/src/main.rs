mod commands;
mod input;
mod output;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::validate::ValidateArgs;
use report_check_core::ReportType;

/// Independent verification of financial report calculations
#[derive(Parser)]
#[command(
    name = "report-check",
    version,
    about = "Independent verification of financial report calculations",
    long_about = "Recomputes a report's figures from its own line items with exact \
                  decimal arithmetic and compares them to what the report claims. \
                  Exits 0 when every checked figure agrees, 1 otherwise."
)]
struct Cli {
    #[command(flatten)]
    validate: ValidateArgs,

    /// Output format
    #[arg(long, default_value = "json")]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Log to stderr so stdout carries only the verdict.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("REPORT_CHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let rendered = e.render().to_string();
            eprint!("{}", rendered);
            // Value errors carry no usage line of their own.
            if !rendered.contains("Usage:") {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            eprintln!("Report types: {}", ReportType::NAMES.join(", "));
            process::exit(1);
        }
    };

    match commands::validate::run_validate(&cli.validate) {
        Ok(outcome) => {
            output::format_output(&cli.output, &outcome);
            process::exit(if outcome.valid { 0 } else { 1 });
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
