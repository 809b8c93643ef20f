use crate::error::IdlError;

/// JSON-quote `text` for use in diagnostics.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn malformed(line: usize, text: &str) -> IdlError {
    IdlError::MalformedLine {
        line,
        text: text.to_string(),
    }
}
