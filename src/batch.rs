//! Batch report generation and aggregation.
//!
//! Inputs are processed in parallel but results preserve input order; each
//! request gets independently constructed values, with the lazily-loaded
//! generator handle as the only shared read-only state.

use crate::core::{BatchSummary, Report};
use crate::report::ReportPipeline;
use rayon::prelude::*;
use tracing::info;

/// Default chunk separator: a blank line.
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Generate one report per input, preserving order.
pub fn run_batch(pipeline: &ReportPipeline, inputs: &[String]) -> Vec<Report> {
    let reports: Vec<Report> = inputs.par_iter().map(|raw| pipeline.run(raw)).collect();
    info!(count = reports.len(), "Batch generation complete");
    reports
}

/// Split one raw blob on `separator`, drop blank chunks, and generate one
/// report per chunk.
pub fn run_batch_chunked(pipeline: &ReportPipeline, raw: &str, separator: &str) -> Vec<Report> {
    let chunks: Vec<String> = raw
        .split(separator)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    run_batch(pipeline, &chunks)
}

/// Aggregate a report sequence: entity totals and the maximum risk score
/// (0 when the sequence is empty).
pub fn summarize(reports: &[Report]) -> BatchSummary {
    BatchSummary {
        report_count: reports.len(),
        total_techniques: reports.iter().map(|r| r.techniques.len()).sum(),
        total_vulnerabilities: reports.iter().map(|r| r.vulnerabilities.len()).sum(),
        total_indicators: reports.iter().map(|r| r.indicators.len()).sum(),
        max_risk_score: reports.iter().map(|r| r.risk_score).max().unwrap_or(0),
    }
}
