//! Severity keyword extraction.

use super::patterns;
use crate::core::Severity;

/// Scan raw text for explicit severity/criticality assignments.
///
/// Matches `severity=high`, `criticality: "critical"` and similar forms,
/// case-insensitively. Unrecognized keywords are discarded silently. Scan
/// order is preserved and duplicates are kept: severity contributes
/// additively per occurrence when scoring.
pub fn extract_severities(text: &str) -> Vec<Severity> {
    patterns::RE_SEVERITY
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| Severity::from_keyword(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_forms_and_case() {
        let text = r#"severity=high Criticality: "critical" SEVERITY : 'low'"#;
        assert_eq!(
            extract_severities(text),
            vec![Severity::High, Severity::Critical, Severity::Low]
        );
    }

    #[test]
    fn unknown_keywords_discarded() {
        assert!(extract_severities("severity=urgent severity=unknown").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let text = "severity=high then later severity=high again";
        assert_eq!(
            extract_severities(text),
            vec![Severity::High, Severity::High]
        );
    }

    #[test]
    fn bare_keywords_do_not_match() {
        // The word alone, without an assignment, is not an extraction.
        assert!(extract_severities("high severity incident").is_empty());
    }
}
