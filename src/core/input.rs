//! Normalized input classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of raw input after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Empty,
    Json,
    Text,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputKind::Empty => "empty",
            InputKind::Json => "json",
            InputKind::Text => "text",
        };
        f.write_str(s)
    }
}

/// Raw input reduced to a flat, line-oriented form.
///
/// Invariants: `kind == Empty` iff `content` is empty after trimming;
/// `kind == Json` iff `content` parses as strict JSON; otherwise `Text`.
/// `lines` never contains blank entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub kind: InputKind,
    /// Trimmed original input.
    pub content: String,
    /// One entry per event: array elements for JSON arrays, the whole
    /// document for JSON objects/scalars, non-blank trimmed lines for text.
    pub lines: Vec<String>,
    /// Parsed JSON value when `kind == Json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<serde_json::Value>,
}

impl NormalizedInput {
    /// Number of events this input represents.
    pub fn event_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == InputKind::Empty
    }
}
