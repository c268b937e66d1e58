//! threat-report: structured incident reports from logs and security alerts.
//!
//! The pipeline normalizes raw input (text or JSON), extracts indicator
//! entities and severity keywords with a fixed regex recognizer table,
//! combines them into a bounded, explainable risk score with tiered
//! confidence, and assembles a report around an externally generated
//! narrative. Extraction and scoring are deterministic and stateless; the
//! narrative collaborator is opaque and replaceable.

/// Core data types module
pub mod core;

/// Batch generation and aggregation
pub mod batch;
/// Error types
pub mod error;
/// Offline evaluation metrics
pub mod eval;
/// Entity and severity extraction
pub mod extract;
/// Narrative-generation collaborator contract
pub mod generate;
/// Input normalization and flattening
pub mod ingest;
/// Logging and tracing setup
pub mod logging;
/// Report assembly and rendering
pub mod report;
/// Sample inputs for demos and tests
pub mod samples;
/// Risk scoring
pub mod score;
/// Narrative-call deadlines
pub mod timeout;

pub use crate::core::{BatchSummary, EntitySet, InputKind, NormalizedInput, Report, Severity};
pub use crate::error::{ReportError, Result};
pub use crate::extract::{extract_entities, extract_severities};
pub use crate::generate::{
    GenerationConfig, GeneratorHandle, HeuristicNarrativeGenerator, NarrativeGenerator,
    StubNarrativeGenerator,
};
pub use crate::ingest::{flatten_for_generation, normalize};
pub use crate::report::{assemble, ReportPipeline};
pub use crate::score::RiskEngine;
