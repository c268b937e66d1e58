//! Pipeline orchestration: normalize, extract, score, assemble.

use crate::core::{EntitySet, InputKind, NormalizedInput, Report, Severity};
use crate::extract::{extract_entities, extract_severities};
use crate::generate::{
    generate_with_timeout, truncate_chars, GenerationConfig, GeneratorHandle,
};
use crate::ingest::{flatten_for_generation, normalize};
use crate::score::RiskEngine;
use crate::timeout::TimeoutConfig;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

/// Fixed executive summary for empty input.
pub const NO_INPUT_SUMMARY: &str =
    "No input provided. Supply logs or alerts to generate a report.";

/// Fixed executive summary when the narrative collaborator is unavailable.
pub const DEGRADED_SUMMARY: &str = "Narrative generation was unavailable for this incident; \
     entity extraction and risk scoring completed normally.";

/// Combine normalized input, extracted entities, severities, and an
/// externally supplied narrative into a report.
///
/// Empty input short-circuits to a fixed placeholder report with
/// `risk_score = 0` and `confidence = 0.0` regardless of the other
/// arguments.
pub fn assemble(
    normalized: &NormalizedInput,
    entities: &EntitySet,
    severities: &[Severity],
    narrative: &str,
) -> Report {
    assemble_with_engine(
        &RiskEngine::default(),
        normalized,
        entities,
        severities,
        narrative,
    )
}

fn assemble_with_engine(
    engine: &RiskEngine,
    normalized: &NormalizedInput,
    entities: &EntitySet,
    severities: &[Severity],
    narrative: &str,
) -> Report {
    if normalized.kind == InputKind::Empty {
        return empty_report();
    }

    let event_count = normalized.event_count();
    let (risk_score, confidence) = engine.score_entities(entities, severities, event_count);

    let technical_summary = format!(
        "Input kind: {}. {} events processed. Detected {} techniques, {} vulnerabilities, and {} indicators.",
        normalized.kind,
        event_count,
        entities.techniques.len(),
        entities.vulnerabilities.len(),
        entities.indicators.len(),
    );

    Report {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        input_sha256: Report::digest_input(&normalized.content),
        executive_summary: narrative.to_string(),
        technical_summary,
        techniques: entities.techniques.clone(),
        indicators: entities.indicators.clone(),
        vulnerabilities: entities.vulnerabilities.clone(),
        threat_actors: Vec::new(),
        risk_score,
        confidence,
    }
}

fn empty_report() -> Report {
    Report {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        input_sha256: Report::digest_input(""),
        executive_summary: NO_INPUT_SUMMARY.to_string(),
        technical_summary: String::new(),
        techniques: Vec::new(),
        indicators: Vec::new(),
        vulnerabilities: Vec::new(),
        threat_actors: Vec::new(),
        risk_score: 0,
        confidence: 0.0,
    }
}

/// The full request pipeline. Stateless across calls except for the
/// lazily-initialized, read-only generator handle; concurrent invocations
/// each receive independently constructed values.
pub struct ReportPipeline {
    generator: GeneratorHandle,
    generation: GenerationConfig,
    engine: RiskEngine,
}

impl ReportPipeline {
    pub fn new(generator: GeneratorHandle) -> Self {
        Self {
            generator,
            generation: GenerationConfig::default(),
            engine: RiskEngine::default(),
        }
    }

    /// Pipeline backed by the in-crate heuristic fallback generator.
    pub fn heuristic() -> Self {
        Self::new(GeneratorHandle::heuristic())
    }

    pub fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Generate a report for one raw input. Never fails: empty input yields
    /// the placeholder report, generator faults yield a degraded report.
    pub fn run(&self, raw: &str) -> Report {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return empty_report();
        }

        let entities = extract_entities(&normalized.content);
        let severities = extract_severities(&normalized.content);
        let narrative = self.narrative(&normalized);

        let report =
            assemble_with_engine(&self.engine, &normalized, &entities, &severities, &narrative);
        info!(
            report_id = %report.report_id,
            kind = %normalized.kind,
            risk = report.risk_score,
            "Assembled incident report"
        );
        report
    }

    /// As [`run`](Self::run), but bounds the narrative call with a deadline.
    /// Timeout degrades to the unavailable-narrative report, never a fault.
    pub async fn run_with_timeout(&self, raw: &str, timeout: TimeoutConfig) -> Report {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return empty_report();
        }

        let entities = extract_entities(&normalized.content);
        let severities = extract_severities(&normalized.content);

        let narrative = match self.generator.get() {
            Ok(generator) => {
                let flat = flatten_for_generation(&normalized);
                let bounded = truncate_chars(&flat, self.generation.max_input_chars).to_string();
                match generate_with_timeout(generator, bounded, timeout).await {
                    Ok(text) => {
                        truncate_chars(&text, self.generation.max_output_chars).to_string()
                    }
                    Err(e) => {
                        warn!(error = %e, "Narrative generation degraded");
                        DEGRADED_SUMMARY.to_string()
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Narrative generator unavailable");
                DEGRADED_SUMMARY.to_string()
            }
        };

        assemble_with_engine(&self.engine, &normalized, &entities, &severities, &narrative)
    }

    fn narrative(&self, normalized: &NormalizedInput) -> String {
        let flat = flatten_for_generation(normalized);
        let bounded = truncate_chars(&flat, self.generation.max_input_chars);
        match self
            .generator
            .get()
            .and_then(|generator| generator.generate(bounded))
        {
            Ok(text) => truncate_chars(&text, self.generation.max_output_chars).to_string(),
            Err(e) => {
                warn!(error = %e, "Narrative generation degraded");
                DEGRADED_SUMMARY.to_string()
            }
        }
    }
}
