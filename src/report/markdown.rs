//! Markdown rendering for assembled reports.

use crate::core::Report;

/// Sample items shown per type in the entity table.
const TABLE_SAMPLES: usize = 5;
/// Indicators listed in the detail section before truncation.
const INDICATOR_DETAIL_LIMIT: usize = 25;
/// Vulnerabilities/indicators contributing to the explainability list.
const EXPLAIN_LIMIT: usize = 5;

fn tag(entity: &str) -> String {
    format!("`{}`", entity)
}

fn sample_cell(items: &[String]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .take(TABLE_SAMPLES)
        .map(|e| tag(e))
        .collect::<Vec<_>>()
        .join(", ")
}

fn tag_list(items: &[String]) -> String {
    items.iter().map(|e| tag(e)).collect::<Vec<_>>().join(", ")
}

/// Render a report as a Markdown document with entity highlighting and
/// summary tables.
pub fn render(report: &Report) -> String {
    let mut sections: Vec<String> = vec![
        "## Executive Summary".to_string(),
        report.executive_summary.clone(),
        String::new(),
        "## Technical Summary".to_string(),
        report.technical_summary.clone(),
        String::new(),
        "## Extracted Entities".to_string(),
        "| Type | Count | Sample |".to_string(),
        "|------|-------|--------|".to_string(),
        format!(
            "| **Techniques** | {} | {} |",
            report.techniques.len(),
            sample_cell(&report.techniques)
        ),
        format!(
            "| **Indicators** | {} | {} |",
            report.indicators.len(),
            sample_cell(&report.indicators)
        ),
        format!(
            "| **Vulnerabilities** | {} | {} |",
            report.vulnerabilities.len(),
            sample_cell(&report.vulnerabilities)
        ),
        String::new(),
        "## Risk Assessment".to_string(),
        format!("- **Risk Score:** {}/100", report.risk_score),
        format!("- **Confidence:** {}", report.confidence),
        String::new(),
    ];

    if !report.techniques.is_empty() {
        sections.push("### Techniques".to_string());
        sections.push(tag_list(&report.techniques));
        sections.push(String::new());
    }
    if !report.indicators.is_empty() {
        sections.push("### Indicators".to_string());
        let shown: Vec<String> = report
            .indicators
            .iter()
            .take(INDICATOR_DETAIL_LIMIT)
            .cloned()
            .collect();
        sections.push(tag_list(&shown));
        sections.push(String::new());
    }
    if !report.vulnerabilities.is_empty() {
        sections.push("### Vulnerabilities".to_string());
        sections.push(tag_list(&report.vulnerabilities));
        sections.push(String::new());
    }

    // Explainability: the entities driving the risk score.
    let mut contributing: Vec<String> = Vec::new();
    contributing.extend(report.techniques.iter().cloned());
    contributing.extend(report.vulnerabilities.iter().take(EXPLAIN_LIMIT).cloned());
    contributing.extend(report.indicators.iter().take(EXPLAIN_LIMIT).cloned());
    if !contributing.is_empty() {
        sections.push("## Explainability".to_string());
        sections.push("Contributing entities (driving risk score):".to_string());
        sections.push(tag_list(&contributing));
        sections.push(String::new());
    }

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportPipeline, NO_INPUT_SUMMARY};

    fn sample_report() -> Report {
        ReportPipeline::heuristic()
            .run("Connect to 192.168.1.1 CVE-2023-1234 T1021.002 severity=high")
    }

    #[test]
    fn sections_present_in_order() {
        let md = render(&sample_report());
        let exec = md.find("## Executive Summary").unwrap();
        let tech = md.find("## Technical Summary").unwrap();
        let entities = md.find("## Extracted Entities").unwrap();
        let risk = md.find("## Risk Assessment").unwrap();
        let explain = md.find("## Explainability").unwrap();
        assert!(exec < tech && tech < entities && entities < risk && risk < explain);
    }

    #[test]
    fn entity_table_rows_and_tagging() {
        let md = render(&sample_report());
        assert!(md.contains("| Type | Count | Sample |"));
        assert!(md.contains("| **Techniques** | 1 | `T1021.002` |"));
        assert!(md.contains("| **Vulnerabilities** | 1 | `CVE-2023-1234` |"));
        assert!(md.contains("| **Indicators** | 1 | `192.168.1.1` |"));
    }

    #[test]
    fn empty_buckets_render_dash_and_skip_details() {
        let report = ReportPipeline::heuristic().run("just a plain log line");
        let md = render(&report);
        assert!(md.contains("| **Techniques** | 0 | - |"));
        assert!(!md.contains("### Techniques"));
        assert!(!md.contains("## Explainability"));
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let report = ReportPipeline::heuristic().run("");
        let md = render(&report);
        assert!(md.contains(NO_INPUT_SUMMARY));
        assert!(md.contains("- **Risk Score:** 0/100"));
        assert!(md.contains("- **Confidence:** 0"));
    }

    #[test]
    fn indicator_detail_section_truncates_at_25() {
        let many: Vec<String> = (0..30).map(|i| format!("10.9.{}.1", i)).collect();
        let raw = many.join(" ");
        let report = ReportPipeline::heuristic().run(&raw);
        assert_eq!(report.indicators.len(), 30);
        let md = render(&report);
        let detail = md.split("### Indicators").nth(1).unwrap();
        let listed = detail.split("\n\n").next().unwrap();
        assert_eq!(listed.matches('`').count() / 2, 25);
    }
}
