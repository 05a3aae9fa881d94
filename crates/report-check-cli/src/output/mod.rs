pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use report_check_core::ValidationOutcome;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, outcome: &ValidationOutcome) {
    match format {
        OutputFormat::Json => json::print_json(&outcome.verdict),
        OutputFormat::Table => table::print_table(outcome),
        OutputFormat::Csv => csv_out::print_csv(&outcome.verdict),
        OutputFormat::Minimal => minimal::print_minimal(outcome.valid),
    }
}

/// One printable line of a verdict: section, dotted field path, value.
pub struct VerdictRow {
    pub section: String,
    pub field: String,
    pub value: String,
}

/// Flatten a verdict into rows, keeping field order. Nested objects such as
/// aging buckets become dotted paths (`aging_buckets.0-30`).
pub fn verdict_rows(verdict: &Value) -> Vec<VerdictRow> {
    let mut rows = Vec::new();
    if let Value::Object(map) = verdict {
        for (section, value) in map {
            match value {
                Value::Object(fields) => {
                    for (field, v) in fields {
                        push_flattened(&mut rows, section, field.clone(), v);
                    }
                }
                other => rows.push(VerdictRow {
                    section: section.clone(),
                    field: String::new(),
                    value: format_value(other),
                }),
            }
        }
    }
    rows
}

fn push_flattened(rows: &mut Vec<VerdictRow>, section: &str, path: String, value: &Value) {
    match value {
        Value::Object(fields) if !fields.is_empty() => {
            for (key, v) in fields {
                push_flattened(rows, section, format!("{}.{}", path, key), v);
            }
        }
        other => rows.push(VerdictRow {
            section: section.to_string(),
            field: path,
            value: format_value(other),
        }),
    }
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "n/a".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
