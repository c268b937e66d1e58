//! Precompiled regex recognizers for indicator scanning.
//!
//! Patterns are intentionally conservative to avoid catastrophic
//! backtracking. The recognizer list and the classification predicates in
//! `entities.rs` form a single co-located table: the technique and
//! vulnerability patterns here must agree exactly with the string-shape
//! predicates that classify their matches.

use once_cell::sync::Lazy;
use regex::Regex;

// IPv4 addresses: four dot-separated octets, each 0-255, word-bounded.
pub static RE_IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
    )
    .expect("valid ipv4 regex")
});

// MD5-shaped and SHA-256-shaped hex tokens.
pub static RE_MD5: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-fA-F0-9]{32}\b").expect("valid md5 regex"));
pub static RE_SHA256: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-fA-F0-9]{64}\b").expect("valid sha256 regex"));

// Domains (RFC 1123-ish labels; permissive by contract, no suffix list).
pub static RE_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}\b")
        .expect("valid domain regex")
});

// Vulnerability identifiers: CVE-YYYY-NNNN+, case-insensitive.
pub static RE_CVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CVE-\d{4}-\d{4,}").expect("valid cve regex"));

// Technique identifiers: T + 4 digits, optional .NNN sub-technique.
pub static RE_TECHNIQUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"T\d{4}(?:\.\d{3})?").expect("valid technique regex"));

// Severity keyword assignments: severity=high, criticality: "critical", ...
pub static RE_SEVERITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:severity|criticality)\s*[=:]\s*['"]?(\w+)['"]?"#)
        .expect("valid severity regex")
});
