use colored::Colorize;
use report_check_core::ValidationOutcome;
use tabled::{builder::Builder, Table};

use super::verdict_rows;

/// Format the verdict as a table using the tabled crate, headed by the
/// report type it was checked as.
pub fn print_table(outcome: &ValidationOutcome) {
    println!("{} {}\n", "Report:".bold(), outcome.report_type);

    let mut builder = Builder::default();
    builder.push_record(["Section", "Field", "Value"]);
    for row in verdict_rows(&outcome.verdict) {
        builder.push_record([row.section, row.field, row.value]);
    }
    let table = Table::from(builder);
    println!("{}", table);

    if outcome.valid {
        println!("\n{}", "All checked figures agree.".green());
    } else {
        println!("\n{}", "Reported figures disagree with the recomputation.".red());
    }
}
