//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `generate`, `tone`, and `inspect`.

use serde::{Deserialize, Serialize};
use sinewav_backend::{AudioError, GenerateResult, WavHeader};
use sinewav_spec::{ParamsError, ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// Validation failures pass their own codes (E001..E003) through unchanged.
pub mod error_codes {
    /// Parameter file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parameter file is malformed
    pub const JSON_PARSE: &str = "CLI_002";
    /// Input is not a recognizable WAV file
    pub const NOT_A_WAV: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parameter the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Sets the field for this error.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        JsonError::new(err.code.code(), &err.message).with_field(err.field.key())
    }
}

impl From<&ParamsError> for JsonError {
    fn from(err: &ParamsError) -> Self {
        match err {
            ParamsError::Read { .. } => JsonError::new(error_codes::FILE_READ, err.to_string()),
            ParamsError::Json(_) => JsonError::new(error_codes::JSON_PARSE, err.to_string()),
            ParamsError::Invalid(inner) => JsonError::from(inner),
        }
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        match err {
            AudioError::InvalidSpec(inner) => JsonError::from(inner),
            _ => JsonError::new(err.code(), err.to_string()),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Parameter the warning refers to
    pub field: String,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            field: warning.field.key().to_string(),
        }
    }
}

/// Summary of a written tone file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToneFileJson {
    /// Output path
    pub path: String,
    /// Sample encoding ("reference" or "pcm16")
    pub encoding: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Declared channel count
    pub channels: u16,
    /// Number of sample indices
    pub sample_count: u64,
    /// Declared data chunk size
    pub data_chunk_size: u32,
    /// Total bytes written
    pub bytes_written: u64,
    /// BLAKE3 hash of the sample bytes
    pub pcm_hash: String,
}

impl From<&GenerateResult> for ToneFileJson {
    fn from(result: &GenerateResult) -> Self {
        Self {
            path: result.path.display().to_string(),
            encoding: result.encoding.as_str().to_string(),
            sample_rate: result.header.sample_rate,
            channels: result.header.channels,
            sample_count: result.sample_count,
            data_chunk_size: result.header.data_chunk_size,
            bytes_written: result.bytes_written,
            pcm_hash: result.pcm_hash.clone(),
        }
    }
}

/// JSON output for the `generate` and `tone` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether the file was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Advisory warnings
    pub warnings: Vec<JsonWarning>,
    /// Parameter source ("text", "json", or "cli")
    pub source: String,
    /// Written file (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ToneFileJson>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(source: &str, result: ToneFileJson, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            source: source.to_string(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(source: &str, errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            source: source.to_string(),
            result: None,
        }
    }
}

/// Header fields as reported by `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderJson {
    /// RIFF chunk size
    pub riff_chunk_size: u32,
    /// fmt chunk size
    pub fmt_chunk_size: u32,
    /// Audio format tag
    pub audio_format: u16,
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Byte rate
    pub byte_rate: u32,
    /// Block align
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Declared data chunk size
    pub data_chunk_size: u32,
}

impl From<&WavHeader> for HeaderJson {
    fn from(header: &WavHeader) -> Self {
        Self {
            riff_chunk_size: header.riff_chunk_size,
            fmt_chunk_size: header.fmt_chunk_size,
            audio_format: header.audio_format,
            channels: header.channels,
            sample_rate: header.sample_rate,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            bits_per_sample: header.bits_per_sample,
            data_chunk_size: header.data_chunk_size,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the file could be inspected
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Inspected file path
    pub path: String,
    /// Parsed header (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderJson>,
    /// Detected sample layout ("standard", "reference", or "unknown")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Bytes following the data chunk descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_bytes: Option<u64>,
    /// BLAKE3 hash of the sample bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinewav_spec::{Field, ValidationError};

    #[test]
    fn test_json_error_from_validation() {
        let err = ValidationError::missing(Field::SampleRate);
        let json = JsonError::from(&err);
        assert_eq!(json.code, "E001");
        assert_eq!(json.field.as_deref(), Some("sample_rate"));
    }

    #[test]
    fn test_json_error_skips_missing_field() {
        let json = serde_json::to_string(&JsonError::new("CLI_003", "not a wav")).unwrap();
        assert!(!json.contains("field"));
    }

    #[test]
    fn test_generate_output_failure_has_no_result() {
        let output = GenerateOutput::failure("cli", vec![JsonError::new("E002", "bad")], vec![]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("result").is_none());
        assert_eq!(json["errors"][0]["code"], "E002");
    }
}
