//! Field-level validation shared by every parameter source.
//!
//! The text loader, the JSON loader and the CLI all funnel their raw values
//! through [`require_positive`] and [`check_output_name`], so the same input
//! produces the same error regardless of where it came from.

use crate::error::{ValidationError, ValidationWarning, WarningCode};

/// Expected extension of the output file.
pub const WAV_EXTENSION: &str = ".wav";

/// The parameters of a tone request, in parameter file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Output filename.
    Output,
    /// Sample rate in Hz.
    SampleRate,
    /// Number of channels.
    Channels,
    /// Tone frequency in Hz.
    Frequency,
    /// Duration in seconds.
    Duration,
}

impl Field {
    /// All fields in parameter file order.
    pub const ALL: [Field; 5] = [
        Field::Output,
        Field::SampleRate,
        Field::Channels,
        Field::Frequency,
        Field::Duration,
    ];

    /// Machine-readable key, as used in JSON parameter files.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Output => "output",
            Field::SampleRate => "sample_rate",
            Field::Channels => "channels",
            Field::Frequency => "frequency",
            Field::Duration => "duration",
        }
    }

    /// Human-readable label for messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Output => "output filename",
            Field::SampleRate => "sample rate",
            Field::Channels => "channel count",
            Field::Frequency => "tone frequency",
            Field::Duration => "duration",
        }
    }

    /// Largest accepted value.
    ///
    /// Channels are a signed 16-bit count, which keeps the 16-bit block align
    /// (`channels * 2`) from wrapping. The others are stored as 32 bits.
    pub fn max_value(&self) -> i64 {
        match self {
            Field::Channels => i16::MAX as i64,
            _ => u32::MAX as i64,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Checks that a numeric value is present and within `1..=field.max_value()`.
pub fn require_positive(field: Field, value: Option<i64>) -> Result<u32, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;
    if value <= 0 || value > field.max_value() {
        return Err(ValidationError::out_of_range(field, value));
    }
    // max_value never exceeds u32::MAX
    Ok(value as u32)
}

/// Parses a raw text value as an integer.
///
/// Empty or whitespace-only input is a missing value, anything that does not
/// parse as an integer is an invalid number.
pub fn parse_integer(field: Field, raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::missing(field));
    }
    raw.parse::<i64>()
        .map_err(|_| ValidationError::not_a_number(field, raw))
}

/// Checks the output filename.
///
/// An empty name is an error. A name without the `.wav` extension is accepted
/// with a warning.
pub fn check_output_name(
    raw: Option<&str>,
) -> Result<(String, Option<ValidationWarning>), ValidationError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::missing(Field::Output));
    }

    let warning = if name.ends_with(WAV_EXTENSION) {
        None
    } else {
        Some(ValidationWarning::new(
            WarningCode::MissingWavExtension,
            Field::Output,
            format!("output filename '{}' is missing the .wav extension", name),
        ))
    };

    Ok((name.to_string(), warning))
}
