//! Sample data extraction and hashing utilities.

use byteorder::{ByteOrder, LittleEndian};

/// Extracts the sample bytes from a WAV file buffer.
///
/// Walks the RIFF chunks to the `data` descriptor and returns everything after
/// it. The declared data size is not used to cut the slice: files written with
/// [`SampleEncoding::Reference`](super::SampleEncoding::Reference) carry more
/// sample bytes than they declare, and `data` is always the last chunk here.
///
/// # Returns
/// Sample bytes if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = LittleEndian::read_u32(&wav_data[pos + 4..pos + 8]) as usize;

        if chunk_id == b"data" {
            return Some(&wav_data[pos + 8..]);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the BLAKE3 hash of the sample bytes of a WAV file.
///
/// # Returns
/// Hex digest, or None if the format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
