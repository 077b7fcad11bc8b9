//! WAV header derivation and serialization.
//!
//! The header is always 44 bytes:
//!
//! | offset | size | field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 4    | `"RIFF"`                                |
//! | 4      | 4    | RIFF chunk size (`data_chunk_size + 36`)|
//! | 8      | 8    | `"WAVEfmt "`                            |
//! | 16     | 4    | fmt chunk size (16)                     |
//! | 20     | 2    | audio format (1 = PCM)                  |
//! | 22     | 2    | channels                                |
//! | 24     | 4    | sample rate                             |
//! | 28     | 4    | byte rate                               |
//! | 32     | 2    | block align                             |
//! | 34     | 2    | bits per sample (16)                    |
//! | 36     | 4    | `"data"`                                |
//! | 40     | 4    | data chunk size                         |

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian};
use sinewav_spec::AudioSpec;

use super::endian::{encode_le16, encode_le32};

/// Size of the serialized header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF chunk size in addition to the data chunk.
pub const RIFF_OVERHEAD: u32 = 36;

/// Declared bits per sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the PCM fmt chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// Audio format tag for uncompressed PCM.
pub const PCM_FORMAT: u16 = 1;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_FMT_TAG: &[u8; 8] = b"WAVEfmt ";
const DATA_TAG: &[u8; 4] = b"data";

/// Header fields of a PCM WAV file.
///
/// Fields hold the values as stored on disk: anything derived from an
/// oversized spec has already wrapped to the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (everything after the first 8 bytes, as declared).
    pub riff_chunk_size: u32,
    /// fmt chunk size.
    pub fmt_chunk_size: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second of audio.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Data chunk size (as declared).
    pub data_chunk_size: u32,
}

impl WavHeader {
    /// Derives the header for `spec`.
    pub fn from_spec(spec: &AudioSpec) -> Self {
        // Sizes use the full frame width; each field is truncated only when stored.
        let frame_bytes = spec.channels as u64 * (BITS_PER_SAMPLE as u64 / 8);
        let block_align = frame_bytes as u16;
        let byte_rate = spec.sample_rate as u64 * frame_bytes;
        let data_chunk_size = spec.total_sample_count().wrapping_mul(frame_bytes) as u32;

        Self {
            riff_chunk_size: data_chunk_size.wrapping_add(RIFF_OVERHEAD),
            fmt_chunk_size: FMT_CHUNK_SIZE,
            audio_format: PCM_FORMAT,
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            byte_rate: byte_rate as u32,
            block_align,
            bits_per_sample: BITS_PER_SAMPLE,
            data_chunk_size,
        }
    }

    /// Serializes the header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let fields: [&[u8]; 12] = [
            RIFF_TAG,
            &encode_le32(self.riff_chunk_size as i64),
            WAVE_FMT_TAG,
            &encode_le32(self.fmt_chunk_size as i64),
            &encode_le16(self.audio_format as i64),
            &encode_le16(self.channels as i64),
            &encode_le32(self.sample_rate as i64),
            &encode_le32(self.byte_rate as i64),
            &encode_le16(self.block_align as i64),
            &encode_le16(self.bits_per_sample as i64),
            DATA_TAG,
            &encode_le32(self.data_chunk_size as i64),
        ];

        let mut out = [0u8; HEADER_LEN];
        let mut pos = 0;
        for field in fields {
            out[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        out
    }

    /// Writes the serialized header to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Parses a header from the first 44 bytes of `bytes`.
    ///
    /// Returns `None` if the buffer is too short or the tags do not match.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let header = bytes.get(..HEADER_LEN)?;
        if &header[0..4] != RIFF_TAG
            || &header[8..16] != WAVE_FMT_TAG
            || &header[36..40] != DATA_TAG
        {
            return None;
        }

        Some(Self {
            riff_chunk_size: LittleEndian::read_u32(&header[4..8]),
            fmt_chunk_size: LittleEndian::read_u32(&header[16..20]),
            audio_format: LittleEndian::read_u16(&header[20..22]),
            channels: LittleEndian::read_u16(&header[22..24]),
            sample_rate: LittleEndian::read_u32(&header[24..28]),
            byte_rate: LittleEndian::read_u32(&header[28..32]),
            block_align: LittleEndian::read_u16(&header[32..34]),
            bits_per_sample: LittleEndian::read_u16(&header[34..36]),
            data_chunk_size: LittleEndian::read_u32(&header[40..44]),
        })
    }
}
