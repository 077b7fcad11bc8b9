//! Inspect command implementation
//!
//! Reads a WAV file, prints its header fields, and identifies whether the
//! sample data uses the standard or the reference (4-byte slot) layout.

use anyhow::{Context, Result};
use colored::Colorize;
use sinewav_backend::wav::{compute_pcm_hash, extract_pcm_data};
use sinewav_backend::WavHeader;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, HeaderJson, InspectOutput, JsonError};
use super::reporting::print_json;

/// Sample data layout detected from the header and the data length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLayout {
    /// Data length equals the declared data chunk size.
    Standard,
    /// One 4-byte slot per declared sample frame.
    Reference,
    /// Neither of the above.
    Unknown,
}

impl DataLayout {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataLayout::Standard => "standard",
            DataLayout::Reference => "reference",
            DataLayout::Unknown => "unknown",
        }
    }
}

/// Everything `inspect` reports about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Parsed header.
    pub header: WavHeader,
    /// Detected layout.
    pub layout: DataLayout,
    /// Bytes after the data chunk descriptor.
    pub data_bytes: u64,
    /// BLAKE3 hash of those bytes.
    pub pcm_hash: String,
}

impl Inspection {
    /// Number of sample frames declared by the header.
    pub fn declared_frames(&self) -> u64 {
        match self.header.block_align {
            0 => 0,
            align => self.header.data_chunk_size as u64 / align as u64,
        }
    }

    /// Declared duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        match self.header.sample_rate {
            0 => 0.0,
            rate => self.declared_frames() as f64 / rate as f64,
        }
    }
}

/// Classifies the data layout.
pub fn detect_layout(header: &WavHeader, data_bytes: u64) -> DataLayout {
    let declared = header.data_chunk_size as u64;
    if data_bytes == declared {
        return DataLayout::Standard;
    }
    let align = header.block_align as u64;
    if align > 0 && declared % align == 0 && data_bytes == declared / align * 4 {
        return DataLayout::Reference;
    }
    DataLayout::Unknown
}

/// Inspects an in-memory WAV file. Returns `None` if it is not one.
pub fn inspect_bytes(bytes: &[u8]) -> Option<Inspection> {
    let header = WavHeader::parse(bytes)?;
    let pcm = extract_pcm_data(bytes)?;
    let pcm_hash = compute_pcm_hash(bytes)?;
    let data_bytes = pcm.len() as u64;

    Some(Inspection {
        header,
        layout: detect_layout(&header, data_bytes),
        data_bytes,
        pcm_hash,
    })
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;
    let inspection = inspect_bytes(&bytes);

    if json_output {
        let output = match &inspection {
            Some(found) => InspectOutput {
                success: true,
                errors: Vec::new(),
                path: input.to_string(),
                header: Some(HeaderJson::from(&found.header)),
                layout: Some(found.layout.as_str().to_string()),
                data_bytes: Some(found.data_bytes),
                pcm_hash: Some(found.pcm_hash.clone()),
            },
            None => InspectOutput {
                success: false,
                errors: vec![JsonError::new(
                    error_codes::NOT_A_WAV,
                    format!("{} is not a PCM WAV file", input),
                )],
                path: input.to_string(),
                header: None,
                layout: None,
                data_bytes: None,
                pcm_hash: None,
            },
        };
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let found = inspection.with_context(|| format!("{} is not a PCM WAV file", input))?;
    let header = &found.header;

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {} {}", "RIFF chunk size:".dimmed(), header.riff_chunk_size);
    println!("  {} {}", "fmt chunk size:".dimmed(), header.fmt_chunk_size);
    println!("  {} {}", "Audio format:".dimmed(), header.audio_format);
    println!("  {} {}", "Channels:".dimmed(), header.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), header.sample_rate);
    println!("  {} {}", "Byte rate:".dimmed(), header.byte_rate);
    println!("  {} {}", "Block align:".dimmed(), header.block_align);
    println!("  {} {}", "Bits per sample:".dimmed(), header.bits_per_sample);
    println!("  {} {}", "Data chunk size:".dimmed(), header.data_chunk_size);
    println!("  {} {}", "Data bytes:".dimmed(), found.data_bytes);
    println!("  {} {}", "Layout:".dimmed(), found.layout.as_str());
    println!("  {} {:.3} s", "Duration:".dimmed(), found.duration_seconds());
    println!("  {} {}", "PCM hash:".dimmed(), found.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
