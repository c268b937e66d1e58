//! Risk scoring and tiered confidence.
//!
//! Deterministic, total, and monotonic in every input: entity counts,
//! severity-weighted occurrences, and event volume combine into a bounded
//! 0-100 score. Confidence is a discrete step function over which entity
//! types were found, not a continuous blend.

use crate::core::{EntitySet, Severity};

/// Base score for any non-empty input.
pub const BASE_SCORE: u32 = 10;
/// Counted indicators are capped so a flood of low-value matches cannot
/// dominate the score.
pub const INDICATOR_CAP: usize = 10;
/// Event-volume contribution cap.
pub const EVENT_CAP: u32 = 10;

/// Weighting engine combining entity counts, severity keywords, and event
/// volume into a clamped risk score plus a confidence tier.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    technique_weight: u32,
    vulnerability_weight: u32,
    indicator_weight: u32,
    severity_multiplier: u32,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            technique_weight: 15,
            vulnerability_weight: 20,
            indicator_weight: 5,
            severity_multiplier: 5,
        }
    }
}

impl RiskEngine {
    /// Compute `(risk_score, confidence)` for one report's inputs.
    ///
    /// Total over its inputs: empty sequences and zero events are valid and
    /// yield the base score with default confidence.
    pub fn score(
        &self,
        techniques: &[String],
        vulnerabilities: &[String],
        indicators: &[String],
        severities: &[Severity],
        event_count: usize,
    ) -> (u8, f64) {
        let mut risk = BASE_SCORE;

        risk += self.technique_weight * techniques.len() as u32;
        risk += self.vulnerability_weight * vulnerabilities.len() as u32;
        risk += self.indicator_weight * indicators.len().min(INDICATOR_CAP) as u32;

        for sev in severities {
            risk += sev.weight() * self.severity_multiplier;
        }

        risk += ((event_count / 5) as u32).min(EVENT_CAP);

        let risk = risk.min(100) as u8;

        // Tiers evaluated ascending; the highest satisfied tier wins.
        let mut confidence = 0.30;
        if !techniques.is_empty() || !vulnerabilities.is_empty() {
            confidence = 0.60;
        }
        if !techniques.is_empty() && (!vulnerabilities.is_empty() || !indicators.is_empty()) {
            confidence = 0.85;
        }
        if !techniques.is_empty() && !vulnerabilities.is_empty() && !indicators.is_empty() {
            confidence = 0.95;
        }

        (risk, round2(confidence))
    }

    /// Convenience over an extracted entity set.
    pub fn score_entities(
        &self,
        entities: &EntitySet,
        severities: &[Severity],
        event_count: usize,
    ) -> (u8, f64) {
        self.score(
            &entities.techniques,
            &entities.vulnerabilities,
            &entities.indicators,
            severities,
            event_count,
        )
    }
}

/// Score with the default engine.
pub fn score(
    techniques: &[String],
    vulnerabilities: &[String],
    indicators: &[String],
    severities: &[Severity],
    event_count: usize,
) -> (u8, f64) {
    RiskEngine::default().score(techniques, vulnerabilities, indicators, severities, event_count)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_score_and_default_confidence() {
        let (risk, conf) = score(&[], &[], &[], &[], 0);
        assert_eq!(risk, 10);
        assert_eq!(conf, 0.30);
    }

    #[test]
    fn confidence_tiers() {
        let t = v(&["T1059.001"]);
        let c = v(&["CVE-2023-1234"]);
        let i = v(&["10.0.0.1"]);

        assert_eq!(score(&t, &[], &[], &[], 0).1, 0.60);
        assert_eq!(score(&[], &c, &[], &[], 0).1, 0.60);
        assert_eq!(score(&t, &c, &[], &[], 0).1, 0.85);
        assert_eq!(score(&t, &[], &i, &[], 0).1, 0.85);
        assert_eq!(score(&t, &c, &i, &[], 0).1, 0.95);
        // Indicators alone never lift confidence above the default.
        assert_eq!(score(&[], &[], &i, &[], 0).1, 0.30);
    }

    #[test]
    fn entity_weights() {
        assert_eq!(score(&v(&["T1021"]), &[], &[], &[], 0).0, 25);
        assert_eq!(score(&[], &v(&["CVE-2023-1"]), &[], &[], 0).0, 30);
        assert_eq!(score(&[], &[], &v(&["a.example.com"]), &[], 0).0, 15);
    }

    #[test]
    fn indicator_contribution_caps_at_ten() {
        let ten: Vec<String> = (0..10).map(|i| format!("10.0.0.{}", i)).collect();
        let twenty: Vec<String> = (0..20).map(|i| format!("10.0.1.{}", i)).collect();
        assert_eq!(score(&[], &[], &ten, &[], 0).0, 60);
        assert_eq!(score(&[], &[], &twenty, &[], 0).0, 60);
    }

    #[test]
    fn severity_contributes_per_occurrence() {
        use crate::core::Severity::*;
        assert_eq!(score(&[], &[], &[], &[Low], 0).0, 15);
        assert_eq!(score(&[], &[], &[], &[Critical], 0).0, 30);
        assert_eq!(score(&[], &[], &[], &[High, High], 0).0, 40);
    }

    #[test]
    fn event_volume_caps_at_ten() {
        assert_eq!(score(&[], &[], &[], &[], 4).0, 10);
        assert_eq!(score(&[], &[], &[], &[], 25).0, 15);
        assert_eq!(score(&[], &[], &[], &[], 500).0, 20);
    }

    #[test]
    fn clamps_at_one_hundred() {
        let many: Vec<String> = (0..50).map(|i| format!("T10{:02}", i)).collect();
        let (risk, _) = score(&many, &[], &[], &[], 0);
        assert_eq!(risk, 100);
    }

    #[test]
    fn monotonic_in_each_component() {
        let t1 = v(&["T1021"]);
        let t2 = v(&["T1021", "T1059"]);
        assert!(score(&t2, &[], &[], &[], 0).0 >= score(&t1, &[], &[], &[], 0).0);

        let i1 = v(&["a.co"]);
        let i2 = v(&["a.co", "b.co"]);
        assert!(score(&[], &[], &i2, &[], 0).0 >= score(&[], &[], &i1, &[], 0).0);

        assert!(score(&[], &[], &[], &[], 10).0 >= score(&[], &[], &[], &[], 5).0);
    }
}
