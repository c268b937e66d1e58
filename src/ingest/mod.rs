//! Input normalization for logs, JSON alerts, and raw text.
//!
//! Classifies raw input as empty/JSON/text, produces a flat line-oriented
//! representation for event counting, and flattens structured alerts into a
//! single text blob for pattern matching and narrative generation.

mod flatten;
mod normalize;

pub use flatten::flatten_for_generation;
pub use normalize::normalize;
