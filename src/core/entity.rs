//! Extracted entity buckets.

use serde::{Deserialize, Serialize};

/// Entities recognized in scanned text, split into three disjoint buckets.
///
/// Ordering within each bucket is first-occurrence order in the scanned
/// text; duplicates are removed while preserving the first occurrence.
/// Classification is mutually exclusive and total over all recognizer
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    /// Attack technique identifiers (e.g. `T1059.001`).
    pub techniques: Vec<String>,
    /// Vulnerability identifiers (e.g. `CVE-2023-1234`).
    pub vulnerabilities: Vec<String>,
    /// Everything else: IPs, hashes, domains.
    pub indicators: Vec<String>,
}

impl EntitySet {
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty() && self.vulnerabilities.is_empty() && self.indicators.is_empty()
    }

    /// Total number of entities across all buckets.
    pub fn len(&self) -> usize {
        self.techniques.len() + self.vulnerabilities.len() + self.indicators.len()
    }

    /// All entities in bucket order, for evaluation against a gold set.
    pub fn flatten(&self) -> Vec<String> {
        let mut out =
            Vec::with_capacity(self.techniques.len() + self.vulnerabilities.len() + self.indicators.len());
        out.extend(self.techniques.iter().cloned());
        out.extend(self.vulnerabilities.iter().cloned());
        out.extend(self.indicators.iter().cloned());
        out
    }
}
