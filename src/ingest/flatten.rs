//! Flattening structured alerts into generator-ready text.

use crate::core::{InputKind, NormalizedInput};
use serde_json::{Map, Value};

/// Render a JSON value as bare text: strings verbatim, everything else as
/// its compact JSON form.
pub(super) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten normalized input into a single text blob for the narrative
/// generator.
///
/// JSON alerts become `key=value` pairs so the generator sees log-like
/// prose rather than raw punctuation; text input passes through untouched.
pub fn flatten_for_generation(input: &NormalizedInput) -> String {
    if input.kind == InputKind::Empty {
        return String::new();
    }
    if input.kind == InputKind::Json {
        match &input.parsed {
            Some(Value::Array(items)) => {
                let texts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(map) => flatten_alert(map),
                        other => value_text(other),
                    })
                    .collect();
                return texts.join("\n");
            }
            Some(Value::Object(map)) => return flatten_alert(map),
            _ => {}
        }
    }
    input.content.clone()
}

/// Convert one alert object into a flat `key=value | key=value` string.
fn flatten_alert(alert: &Map<String, Value>) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in alert {
        match v {
            Value::Object(_) | Value::Array(_) => parts.extend(flatten_value(v, k)),
            scalar => parts.push(format!("{}={}", k, value_text(scalar))),
        }
    }
    parts.join(" | ")
}

/// Flatten nested JSON into `key=value` strings with dotted/indexed keys.
fn flatten_value(value: &Value, prefix: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                out.extend(flatten_value(v, &key));
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                let key = if prefix.is_empty() {
                    format!("[{}]", i)
                } else {
                    format!("{}[{}]", prefix, i)
                };
                out.extend(flatten_value(v, &key));
            }
        }
        scalar => {
            if prefix.is_empty() {
                out.push(value_text(scalar));
            } else {
                out.push(format!("{}={}", prefix, value_text(scalar)));
            }
        }
    }
    out
}
