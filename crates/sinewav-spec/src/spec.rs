//! Tone parameter types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationWarning};
use crate::validation::{check_output_name, require_positive, Field};

/// Parameters of a single sine tone.
///
/// All four fields must be greater than zero; see [`AudioSpec::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSpec {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels declared in the header.
    pub channels: u16,
    /// Tone frequency in Hz.
    pub frequency: u32,
    /// Duration in seconds.
    pub duration_seconds: u32,
}

impl AudioSpec {
    /// Creates a new audio spec. The values are not checked until [`validate`](Self::validate).
    pub fn new(sample_rate: u32, channels: u16, frequency: u32, duration_seconds: u32) -> Self {
        Self {
            sample_rate,
            channels,
            frequency,
            duration_seconds,
        }
    }

    /// Creates a single-channel spec.
    pub fn mono(sample_rate: u32, frequency: u32, duration_seconds: u32) -> Self {
        Self::new(sample_rate, 1, frequency, duration_seconds)
    }

    /// Checks that every field is greater than zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let checks = [
            (Field::SampleRate, self.sample_rate as i64),
            (Field::Channels, self.channels as i64),
            (Field::Frequency, self.frequency as i64),
            (Field::Duration, self.duration_seconds as i64),
        ];
        for (field, value) in checks {
            require_positive(field, Some(value))?;
        }
        Ok(())
    }

    /// Number of sample indices in the tone: `duration_seconds * sample_rate`.
    pub fn total_sample_count(&self) -> u64 {
        self.duration_seconds as u64 * self.sample_rate as u64
    }
}

/// A fully parsed request: where to write, and what to synthesize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRequest {
    /// Output file path.
    pub output: PathBuf,
    /// Tone parameters.
    pub spec: AudioSpec,
}

impl ToneRequest {
    /// Creates a new tone request.
    pub fn new(output: impl Into<PathBuf>, spec: AudioSpec) -> Self {
        Self {
            output: output.into(),
            spec,
        }
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Unvalidated parameter values, as read from a parameter file or the command line.
///
/// Numbers are kept signed so that negative input is reported as out of range
/// rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamValues {
    /// Output filename.
    #[serde(default)]
    pub output: Option<String>,
    /// Sample rate in Hz.
    #[serde(default)]
    pub sample_rate: Option<i64>,
    /// Number of channels.
    #[serde(default)]
    pub channels: Option<i64>,
    /// Tone frequency in Hz.
    #[serde(default)]
    pub frequency: Option<i64>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<i64>,
}

impl ParamValues {
    /// Validates the values in parameter file order and builds a request.
    ///
    /// The first failing field is reported. Warnings are returned alongside
    /// the request.
    pub fn validate(&self) -> Result<(ToneRequest, Vec<ValidationWarning>), ValidationError> {
        let (output, warning) = check_output_name(self.output.as_deref())?;
        let sample_rate = require_positive(Field::SampleRate, self.sample_rate)?;
        let channels = require_positive(Field::Channels, self.channels)?;
        let frequency = require_positive(Field::Frequency, self.frequency)?;
        let duration = require_positive(Field::Duration, self.duration)?;

        // require_positive bounds channels to i16::MAX
        let spec = AudioSpec::new(sample_rate, channels as u16, frequency, duration);
        let warnings = warning.into_iter().collect();
        Ok((ToneRequest::new(output, spec), warnings))
    }
}
