//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;
use sinewav_spec::AudioSpec;

use super::header::{WavHeader, HEADER_LEN};
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::tone::{sample_at, ToneSamples};
use super::writer::{encode_sample, render_to_vec, write_samples, write_tone, SampleEncoding};

// =========================================================================
// Header derivation tests
// =========================================================================

#[test]
fn test_header_fields_mono_8k() {
    let header = WavHeader::from_spec(&AudioSpec::mono(8000, 440, 1));
    assert_eq!(header.channels, 1);
    assert_eq!(header.sample_rate, 8000);
    assert_eq!(header.block_align, 2);
    assert_eq!(header.byte_rate, 16000);
    assert_eq!(header.bits_per_sample, 16);
    assert_eq!(header.audio_format, 1);
    assert_eq!(header.fmt_chunk_size, 16);
    assert_eq!(header.data_chunk_size, 16000);
    assert_eq!(header.riff_chunk_size, 16036);
}

#[test]
fn test_header_fields_stereo() {
    let header = WavHeader::from_spec(&AudioSpec::new(44100, 2, 440, 3));
    assert_eq!(header.block_align, 4);
    assert_eq!(header.byte_rate, 176400);
    assert_eq!(header.data_chunk_size, 44100 * 3 * 4);
}

#[test]
fn test_riff_size_is_data_plus_36() {
    for spec in [
        AudioSpec::mono(8000, 440, 1),
        AudioSpec::new(48000, 2, 1000, 5),
        AudioSpec::new(11025, 6, 60, 9),
    ] {
        let header = WavHeader::from_spec(&spec);
        assert_eq!(header.riff_chunk_size, header.data_chunk_size + 36);
    }
}

#[test]
fn test_header_max_channels_does_not_wrap() {
    let header = WavHeader::from_spec(&AudioSpec::new(8000, 32767, 440, 1));
    assert_eq!(header.block_align, 65534);
    assert_eq!(header.byte_rate, 8000 * 65534);
    assert_eq!(header.data_chunk_size, 8000 * 65534);
}

#[test]
fn test_header_byte_rate_uses_channel_count() {
    // outside the accepted range: block align wraps, byte rate keeps the formula
    let header = WavHeader::from_spec(&AudioSpec::new(8000, 32768, 440, 1));
    assert_eq!(header.block_align, 0);
    assert_eq!(header.byte_rate, 8000 * 32768 * 2);
    assert_eq!(header.data_chunk_size, 8000 * 32768 * 2);
}

#[test]
fn test_header_sizes_wrap_silently() {
    // 2^32 sample indices mono: 2^33 data bytes wraps to 0
    let spec = AudioSpec::mono(65536, 440, 65536);
    let header = WavHeader::from_spec(&spec);
    assert_eq!(header.data_chunk_size, 0);
    assert_eq!(header.riff_chunk_size, 36);
}

// =========================================================================
// Header serialization tests
// =========================================================================

#[test]
fn test_header_bytes_hand_computed() {
    let bytes = WavHeader::from_spec(&AudioSpec::mono(8000, 440, 1)).to_bytes();

    #[rustfmt::skip]
    let expected: [u8; HEADER_LEN] = [
        b'R', b'I', b'F', b'F',
        0xA4, 0x3E, 0x00, 0x00,                         // 16036
        b'W', b'A', b'V', b'E', b'f', b'm', b't', b' ',
        0x10, 0x00, 0x00, 0x00,                         // 16
        0x01, 0x00,                                     // PCM
        0x01, 0x00,                                     // channels
        0x40, 0x1F, 0x00, 0x00,                         // 8000 Hz
        0x80, 0x3E, 0x00, 0x00,                         // 16000 bytes/s
        0x02, 0x00,                                     // block align
        0x10, 0x00,                                     // 16 bits
        b'd', b'a', b't', b'a',
        0x80, 0x3E, 0x00, 0x00,                         // 16000
    ];

    assert_eq!(bytes, expected);
}

#[test]
fn test_header_write_to_matches_to_bytes() {
    let header = WavHeader::from_spec(&AudioSpec::new(22050, 2, 330, 2));
    let mut out = Vec::new();
    header.write_to(&mut out).unwrap();
    assert_eq!(out.as_slice(), &header.to_bytes()[..]);
}

#[test]
fn test_header_parse_recovers_fields() {
    let header = WavHeader::from_spec(&AudioSpec::new(48000, 2, 1000, 4));
    let parsed = WavHeader::parse(&header.to_bytes()).expect("should parse");
    assert_eq!(parsed, header);
}

#[test]
fn test_header_parse_rejects_bad_input() {
    let bytes = WavHeader::from_spec(&AudioSpec::mono(8000, 440, 1)).to_bytes();
    assert!(WavHeader::parse(&bytes[..43]).is_none());

    let mut bad = bytes;
    bad[0] = b'X';
    assert!(WavHeader::parse(&bad).is_none());

    let mut bad = bytes;
    bad[36] = b'D';
    assert!(WavHeader::parse(&bad).is_none());
}

// =========================================================================
// Sample encoding tests
// =========================================================================

#[test]
fn test_encode_sample_reference() {
    let mut out = Vec::new();
    encode_sample(&mut out, -32767, SampleEncoding::Reference, 2).unwrap();
    assert_eq!(out, vec![0x01, 0x80, 0xFF, 0xFF]);
}

#[test]
fn test_encode_sample_pcm16_repeats_per_channel() {
    let mut out = Vec::new();
    encode_sample(&mut out, 32767, SampleEncoding::Pcm16, 3).unwrap();
    assert_eq!(out, vec![0xFF, 0x7F, 0xFF, 0x7F, 0xFF, 0x7F]);
}

#[test]
fn test_write_samples_reports_length() {
    let spec = AudioSpec::new(1000, 2, 50, 1);
    let mut out = Vec::new();
    let written = write_samples(&mut out, &spec, SampleEncoding::Pcm16).unwrap();
    assert_eq!(written, 4000);
    assert_eq!(out.len(), 4000);
}

#[test]
fn test_reference_slots_hold_samples() {
    let spec = AudioSpec::mono(8000, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Reference);
    let data = &wav[HEADER_LEN..];

    assert_eq!(&data[0..4], &[0, 0, 0, 0]);
    for (index, slot) in data.chunks_exact(4).enumerate().step_by(97) {
        let value = i32::from_le_bytes([slot[0], slot[1], slot[2], slot[3]]);
        assert_eq!(value, sample_at(&spec, index as u64));
    }
}

#[test]
fn test_pcm16_frames_duplicate_mono_content() {
    let spec = AudioSpec::new(8000, 2, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Pcm16);
    let data = &wav[HEADER_LEN..];

    for (frame, expected) in data.chunks_exact(4).zip(ToneSamples::new(&spec)) {
        let left = i16::from_le_bytes([frame[0], frame[1]]);
        let right = i16::from_le_bytes([frame[2], frame[3]]);
        assert_eq!(left, right);
        assert_eq!(left as i32, expected);
    }
}

// =========================================================================
// File layout tests
// =========================================================================

#[test]
fn test_reference_file_size() {
    let spec = AudioSpec::mono(44100, 440, 2);
    let wav = render_to_vec(&spec, SampleEncoding::Reference);
    assert_eq!(spec.total_sample_count(), 88200);
    assert_eq!(wav.len(), 352844);
    assert_eq!(SampleEncoding::Reference.file_len(&spec), 352844);
}

#[test]
fn test_reference_size_ignores_channels() {
    let spec = AudioSpec::new(8000, 4, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Reference);
    assert_eq!(wav.len(), 44 + 4 * 8000);

    // the header still declares four channels
    let header = WavHeader::parse(&wav).unwrap();
    assert_eq!(header.channels, 4);
    assert_eq!(header.data_chunk_size, 8000 * 8);
}

#[test]
fn test_pcm16_matches_declared_size() {
    let spec = AudioSpec::new(8000, 2, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Pcm16);
    let header = WavHeader::parse(&wav).unwrap();
    assert_eq!(wav.len() as u64, HEADER_LEN as u64 + header.data_chunk_size as u64);
    assert_eq!(header.riff_chunk_size as usize, wav.len() - 8);
}

#[test]
fn test_lengths_saturate_for_largest_spec() {
    let spec = AudioSpec::new(u32::MAX, 1, 440, u32::MAX);
    assert!(spec.validate().is_ok());
    assert_eq!(SampleEncoding::Reference.data_len(&spec), u64::MAX);
    assert_eq!(SampleEncoding::Reference.file_len(&spec), u64::MAX);

    let spec = AudioSpec::new(u32::MAX, 32767, 440, u32::MAX);
    assert_eq!(SampleEncoding::Pcm16.file_len(&spec), u64::MAX);
}

#[test]
fn test_write_tone_returns_header() {
    let spec = AudioSpec::mono(8000, 440, 1);
    let mut out = Vec::new();
    let header = write_tone(&mut out, &spec, SampleEncoding::Reference).unwrap();
    assert_eq!(header, WavHeader::from_spec(&spec));
    assert_eq!(&out[..HEADER_LEN], &header.to_bytes()[..]);
}

#[test]
fn test_render_is_deterministic() {
    let spec = AudioSpec::new(22050, 2, 523, 1);
    let first = render_to_vec(&spec, SampleEncoding::Reference);
    let second = render_to_vec(&spec, SampleEncoding::Reference);
    assert!(first == second);
}

// =========================================================================
// PCM extraction and hashing tests
// =========================================================================

#[test]
fn test_extract_pcm_data_reference() {
    let spec = AudioSpec::mono(8000, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Reference);
    let pcm = extract_pcm_data(&wav).expect("should extract PCM");
    // all slots, not just the declared 16000 bytes
    assert_eq!(pcm.len(), 32000);
}

#[test]
fn test_extract_pcm_data_invalid() {
    assert!(extract_pcm_data(b"RIFF").is_none());
    assert!(extract_pcm_data(b"RIFX\0\0\0\0WAVEfmt ").is_none());
    assert!(extract_pcm_data(b"RIFF\0\0\0\0WAVE").is_none());
}

#[test]
fn test_pcm_hash_determinism() {
    let spec = AudioSpec::mono(8000, 440, 1);
    let wav = render_to_vec(&spec, SampleEncoding::Reference);
    let hash1 = compute_pcm_hash(&wav).unwrap();
    let hash2 = compute_pcm_hash(&render_to_vec(&spec, SampleEncoding::Reference)).unwrap();

    assert_eq!(hash1, hash2);
    assert_eq!(hash1.len(), 64); // BLAKE3 produces 64 hex chars
}

#[test]
fn test_pcm_hash_differs_between_encodings() {
    let spec = AudioSpec::mono(8000, 440, 1);
    let reference = compute_pcm_hash(&render_to_vec(&spec, SampleEncoding::Reference)).unwrap();
    let pcm16 = compute_pcm_hash(&render_to_vec(&spec, SampleEncoding::Pcm16)).unwrap();
    assert_ne!(reference, pcm16);
}
