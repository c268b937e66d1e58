//! Error types for the threat-report pipeline.
//!
//! Input classification is never an error: anything that fails JSON parsing
//! is reinterpreted as text. The variants here cover the narrative
//! collaborator and the export surface, the only places a fault can occur.

use thiserror::Error;

/// Main error type for report-generation operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The narrative-generation collaborator could not be constructed.
    #[error("Generator initialization failed: {0}")]
    GeneratorInit(String),

    /// The narrative-generation collaborator failed mid-call.
    #[error("Narrative generation failed: {0}")]
    Generation(String),

    /// Narrative generation exceeded its deadline.
    #[error("Generation timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// File I/O errors from the export helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for report-generation operations.
pub type Result<T> = std::result::Result<T, ReportError>;
