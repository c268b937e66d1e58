//! Deterministic sample inputs for demos and tests.

/// A multi-line plain-text log excerpt covering all entity buckets.
pub const SAMPLE_TEXT_LOG: &str = "\
2024-03-11 09:14:02 UTC auth failure for admin from 203.0.113.22 severity=medium
2024-03-11 09:14:19 UTC auth failure for admin from 203.0.113.22 severity=medium
2024-03-11 09:15:03 UTC successful login for admin from 203.0.113.22 severity=high
2024-03-11 09:17:44 UTC SMB session to fileserver via T1021.002
2024-03-11 09:21:10 UTC dropped payload 5d41402abc4b2a76b9719d911017c592 exploiting CVE-2023-1234
2024-03-11 09:22:51 UTC c2 beacon to malware-c2.example.com";

/// A JSON alert batch in the shape SIEM exports commonly use.
pub const SAMPLE_JSON_ALERTS: &str = r#"[
  {"event_type": "malware_detected", "severity": "high", "source_ip": "192.168.1.105", "dest_ip": "10.0.0.42"},
  {"event_type": "brute_force", "severity": "medium", "source_ip": "203.0.113.22", "target": "ssh"},
  {"event_type": "lateral_movement", "severity": "critical", "technique": "T1021.002"},
  {"event_type": "c2_beacon", "severity": "critical", "domain": "malware-c2.example.com"}
]"#;
