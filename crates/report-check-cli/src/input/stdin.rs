use serde_json::Value;
use std::io::{self, Read};

/// Read a report document piped on stdin. JSON is tried first; anything
/// that is not JSON is parsed as YAML. Returns None if stdin is a TTY
/// (interactive) or empty.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped(text: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| format!("Invalid JSON on stdin: {}", e))?;
        return Ok(Some(value));
    }

    let value: Value =
        serde_yaml::from_str(trimmed).map_err(|e| format!("Invalid YAML on stdin: {}", e))?;
    Ok(Some(value))
}
