use serde_json::Value;
use std::io::{self, Write};

/// Write the verdict as indented JSON, fields in verdict order.
pub fn print_json(verdict: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = serde_json::to_writer_pretty(&mut out, verdict)
        .map_err(io::Error::from)
        .and_then(|_| writeln!(out));
    if let Err(e) = written {
        eprintln!("Failed to write verdict: {}", e);
    }
}
