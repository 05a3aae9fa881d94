use serde_json::Value;
use std::io;

use super::verdict_rows;

/// Write the verdict as three-column CSV to stdout.
pub fn print_csv(verdict: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["section", "field", "value"]);
    for row in verdict_rows(verdict) {
        let value = if row.value == "n/a" { String::new() } else { row.value };
        let _ = wtr.write_record([row.section, row.field, value]);
    }

    let _ = wtr.flush();
}
