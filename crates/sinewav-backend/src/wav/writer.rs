//! Streaming tone serialization.

use std::io::{self, Write};

use sinewav_spec::AudioSpec;

use super::endian::{encode_le16, encode_le32};
use super::header::{WavHeader, HEADER_LEN};
use super::tone::ToneSamples;

/// How sample values are laid out in the data chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SampleEncoding {
    /// One 4-byte little-endian slot per sample index, whatever the channel
    /// count. The data written is larger than the header's declared data
    /// chunk size.
    #[default]
    Reference,
    /// One 2-byte little-endian `i16` per channel per sample index. The data
    /// written matches the declared data chunk size.
    Pcm16,
}

impl SampleEncoding {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleEncoding::Reference => "reference",
            SampleEncoding::Pcm16 => "pcm16",
        }
    }

    /// Bytes written per sample index for `channels` channels.
    pub fn bytes_per_index(&self, channels: u16) -> u64 {
        match self {
            SampleEncoding::Reference => 4,
            SampleEncoding::Pcm16 => 2 * channels as u64,
        }
    }

    /// Number of data bytes this encoding writes for `spec`, saturating at `u64::MAX`.
    pub fn data_len(&self, spec: &AudioSpec) -> u64 {
        spec.total_sample_count()
            .saturating_mul(self.bytes_per_index(spec.channels))
    }

    /// Total file length this encoding produces for `spec`, saturating at `u64::MAX`.
    pub fn file_len(&self, spec: &AudioSpec) -> u64 {
        (HEADER_LEN as u64).saturating_add(self.data_len(spec))
    }
}

impl std::fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes one sample in the given encoding.
pub fn encode_sample<W: Write>(
    writer: &mut W,
    sample: i32,
    encoding: SampleEncoding,
    channels: u16,
) -> io::Result<()> {
    match encoding {
        SampleEncoding::Reference => writer.write_all(&encode_le32(sample as i64)),
        SampleEncoding::Pcm16 => {
            let bytes = encode_le16(sample as i64);
            for _ in 0..channels {
                writer.write_all(&bytes)?;
            }
            Ok(())
        }
    }
}

/// Streams every sample of the tone to `writer`, in index order.
///
/// Returns the number of bytes written.
pub fn write_samples<W: Write>(
    writer: &mut W,
    spec: &AudioSpec,
    encoding: SampleEncoding,
) -> io::Result<u64> {
    for sample in ToneSamples::new(spec) {
        encode_sample(writer, sample, encoding, spec.channels)?;
    }
    Ok(encoding.data_len(spec))
}

/// Writes the header followed by every sample of the tone.
///
/// Returns the header that was written.
pub fn write_tone<W: Write>(
    writer: &mut W,
    spec: &AudioSpec,
    encoding: SampleEncoding,
) -> io::Result<WavHeader> {
    let header = WavHeader::from_spec(spec);
    header.write_to(writer)?;
    write_samples(writer, spec, encoding)?;
    Ok(header)
}

/// Renders the complete file into memory.
pub fn render_to_vec(spec: &AudioSpec, encoding: SampleEncoding) -> Vec<u8> {
    let capacity = usize::try_from(encoding.file_len(spec)).unwrap_or(0);
    let mut buffer = Vec::with_capacity(capacity);
    write_tone(&mut buffer, spec, encoding).expect("writing to Vec should not fail");
    buffer
}
