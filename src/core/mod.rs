//! Core data types for the incident-report pipeline.
//!
//! These types capture the normalized input, extracted entity buckets,
//! severity keywords, and the assembled report record. They serialize with
//! serde for persistence by external collaborators; the core itself never
//! stores or mutates them after construction.

pub mod entity;
pub mod input;
pub mod report;
pub mod severity;

pub use entity::EntitySet;
pub use input::{InputKind, NormalizedInput};
pub use report::{BatchSummary, Report};
pub use severity::Severity;
