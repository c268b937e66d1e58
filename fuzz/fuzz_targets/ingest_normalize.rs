#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let normalized = threat_report::normalize(text);
        let _ = threat_report::flatten_for_generation(&normalized);
    }
});
