#![no_main]

use libfuzzer_sys::fuzz_target;
use sinewav_backend::wav::{compute_pcm_hash, extract_pcm_data};
use sinewav_backend::WavHeader;

fuzz_target!(|data: &[u8]| {
    if let Some(header) = WavHeader::parse(data) {
        assert_eq!(WavHeader::parse(&header.to_bytes()), Some(header));
    }
    let _ = extract_pcm_data(data);
    let _ = compute_pcm_hash(data);
});
