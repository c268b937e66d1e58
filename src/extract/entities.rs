//! Indicator extraction: ordered scan, stable dedup, shape classification.

use super::patterns;
use crate::core::EntitySet;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Recognizers in fixed priority order. Order affects only the
/// first-occurrence position used by dedup, not classification.
fn recognizers() -> [&'static Regex; 6] {
    [
        &patterns::RE_IPV4,
        &patterns::RE_MD5,
        &patterns::RE_SHA256,
        &patterns::RE_DOMAIN,
        &patterns::RE_CVE,
        &patterns::RE_TECHNIQUE,
    ]
}

/// Scan text with every recognizer and classify matches into techniques,
/// vulnerabilities, and generic indicators.
///
/// Matches are concatenated in scan order and deduplicated preserving the
/// first occurrence; a literal string appearing twice keeps only its first
/// position. Idempotent over the same text.
pub fn extract_entities(text: &str) -> EntitySet {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<&str> = Vec::new();

    for re in recognizers() {
        for m in re.find_iter(text) {
            let tok = m.as_str();
            if seen.insert(tok) {
                ordered.push(tok);
            }
        }
    }

    let mut set = EntitySet::default();
    for tok in ordered {
        if is_technique_shaped(tok) {
            set.techniques.push(tok.to_string());
        } else if is_vulnerability_shaped(tok) {
            set.vulnerabilities.push(tok.to_string());
        } else {
            set.indicators.push(tok.to_string());
        }
    }

    debug!(
        techniques = set.techniques.len(),
        vulnerabilities = set.vulnerabilities.len(),
        indicators = set.indicators.len(),
        "Extracted entities"
    );
    set
}

/// Authoritative technique predicate: leading `T`, remaining characters
/// (dots removed) non-empty and all ASCII digits. Must agree with
/// `patterns::RE_TECHNIQUE`.
fn is_technique_shaped(tok: &str) -> bool {
    let Some(rest) = tok.strip_prefix('T') else {
        return false;
    };
    let mut any = false;
    for c in rest.chars() {
        if c == '.' {
            continue;
        }
        if !c.is_ascii_digit() {
            return false;
        }
        any = true;
    }
    any
}

/// Authoritative vulnerability predicate: case-insensitive `CVE-` prefix.
/// Must agree with `patterns::RE_CVE`.
fn is_vulnerability_shaped(tok: &str) -> bool {
    tok.len() >= 4 && tok[..4].eq_ignore_ascii_case("CVE-")
}
