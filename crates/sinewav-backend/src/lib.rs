//! sinewav Tone Backend
//!
//! This crate synthesizes a single sine tone and serializes it as a PCM WAV
//! file.
//!
//! # Overview
//!
//! Given an [`AudioSpec`](sinewav_spec::AudioSpec) (sample rate, channel
//! count, tone frequency, duration) the backend:
//!
//! - derives the 44-byte header ([`wav::WavHeader`])
//! - streams `duration * sample_rate` samples of
//!   `floor(32767 * sin(2 * frequency * π / sample_rate * i))`
//!   ([`wav::ToneSamples`])
//! - encodes every field and sample little-endian ([`wav::encode_le32`],
//!   [`wav::encode_le16`])
//!
//! # Determinism
//!
//! Output depends only on the `AudioSpec` and the [`SampleEncoding`]. Rendering the
//! same spec twice yields byte-identical files; the BLAKE3 hash of the sample
//! bytes is reported with every write.
//!
//! # Example
//!
//! ```
//! use sinewav_backend::wav::{render_to_vec, SampleEncoding};
//! use sinewav_spec::AudioSpec;
//!
//! let spec = AudioSpec::mono(44100, 440, 2);
//! let wav = render_to_vec(&spec, SampleEncoding::Reference);
//! assert_eq!(wav.len(), 352844);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Write a tone request to disk
//! - [`wav`] - Header, synthesis, and encoding primitives

pub mod error;
pub mod generate;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, GenerateResult};
pub use wav::{SampleEncoding, WavHeader};
