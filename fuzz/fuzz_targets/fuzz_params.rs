#![no_main]

use libfuzzer_sys::fuzz_target;
use sinewav_spec::params::{parse_json, parse_text};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok((request, _)) = parse_text(s) {
            assert!(request.spec.validate().is_ok());
        }
        if let Ok((request, _)) = parse_json(s) {
            assert!(request.spec.validate().is_ok());
        }
    }
});
