#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = threat_report::extract_entities(text);
        let _ = threat_report::extract_severities(text);
    }
});
