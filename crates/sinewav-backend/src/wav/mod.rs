//! Deterministic WAV file writer.
//!
//! This module writes a single sine tone as a PCM WAV file with no timestamps
//! or variable metadata, so identical parameters always produce identical
//! bytes. The hash of the sample data identifies a render.

mod endian;
mod header;
mod pcm;
mod tone;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use endian::{encode_le16, encode_le32};
pub use header::{WavHeader, BITS_PER_SAMPLE, FMT_CHUNK_SIZE, HEADER_LEN, PCM_FORMAT, RIFF_OVERHEAD};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use tone::{angle_step, sample_at, ToneSamples, AMPLITUDE};
pub use writer::{encode_sample, render_to_vec, write_samples, write_tone, SampleEncoding};
