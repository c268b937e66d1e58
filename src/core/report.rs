//! The assembled incident report record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A structured incident report produced once per input.
///
/// Immutable after assembly; persistence is an external collaborator's
/// concern. The provenance fields (`report_id`, `generated_at`,
/// `input_sha256`) identify the report and its input but carry no scoring
/// or rendering semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report ID.
    pub report_id: Uuid,
    /// Assembly timestamp (UTC).
    pub generated_at: DateTime<Utc>,
    /// Hex SHA-256 of the trimmed raw input.
    pub input_sha256: String,

    /// Narrative text from the generation collaborator, used verbatim.
    pub executive_summary: String,
    /// Deterministic templated sentence: input kind, event count, entity counts.
    pub technical_summary: String,
    pub techniques: Vec<String>,
    pub indicators: Vec<String>,
    pub vulnerabilities: Vec<String>,
    /// Always empty in this core; present for report-shape compatibility.
    pub threat_actors: Vec<String>,
    /// Bounded risk score in 0..=100.
    pub risk_score: u8,
    /// Tiered confidence in 0.0..=1.0, rounded to 2 decimals.
    pub confidence: f64,
}

impl Report {
    /// Hex SHA-256 digest used for the `input_sha256` provenance field.
    pub fn digest_input(trimmed: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(trimmed.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Aggregate view over a batch of reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub report_count: usize,
    pub total_techniques: usize,
    pub total_vulnerabilities: usize,
    pub total_indicators: usize,
    /// Max of 0 when the report sequence is empty.
    pub max_risk_score: u8,
}
