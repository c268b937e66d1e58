//! Report assembly and rendering.
//!
//! The assembler combines the generated narrative with extracted entities
//! and the risk score into a single immutable record, and renders it to
//! Markdown (with entity highlighting and summary tables) or a minimal
//! print-friendly HTML document.

mod assemble;
pub mod html;
pub mod markdown;

pub use assemble::{assemble, ReportPipeline, DEGRADED_SUMMARY, NO_INPUT_SUMMARY};
