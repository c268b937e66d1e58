//! Raw-input classification and line splitting.

use crate::core::{InputKind, NormalizedInput};
use serde_json::Value;
use tracing::debug;

use super::flatten::value_text;

/// Normalize raw input into a classified, line-oriented form.
///
/// JSON parse failure is a classification branch, not an error; this
/// function is total.
pub fn normalize(raw: &str) -> NormalizedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedInput {
            kind: InputKind::Empty,
            content: String::new(),
            lines: Vec::new(),
            parsed: None,
        };
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(parsed) => {
            let lines = json_lines(trimmed, &parsed);
            debug!(events = lines.len(), "Classified input as JSON");
            NormalizedInput {
                kind: InputKind::Json,
                content: trimmed.to_string(),
                lines,
                parsed: Some(parsed),
            }
        }
        Err(_) => {
            // Plain text / log lines: trimmed, blanks dropped, order kept.
            let lines: Vec<String> = trimmed
                .lines()
                .map(str::trim)
                .filter(|ln| !ln.is_empty())
                .map(str::to_string)
                .collect();
            debug!(events = lines.len(), "Classified input as text");
            NormalizedInput {
                kind: InputKind::Text,
                content: trimmed.to_string(),
                lines,
                parsed: None,
            }
        }
    }
}

/// One line per event for JSON input.
///
/// Arrays yield one entry per element (objects re-serialized compactly,
/// everything else stringified); objects and scalars yield a single entry.
fn json_lines(trimmed: &str, parsed: &Value) -> Vec<String> {
    match parsed {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(_) => item.to_string(),
                other => value_text(other),
            })
            .collect(),
        Value::Object(_) => vec![trimmed.to_string()],
        other => vec![value_text(other)],
    }
}
