//! Entity and severity extraction over normalized text.
//!
//! A fixed, ordered set of regex recognizers feeds a stable first-occurrence
//! dedup pass; classification into buckets is re-derived from the literal
//! string shape alone. Downstream consumers rely on the string-shape
//! classification, not on which recognizer produced a match.

mod entities;
pub mod patterns;
mod severity;

pub use entities::extract_entities;
pub use severity::extract_severities;
