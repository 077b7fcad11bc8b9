//! Tone command implementation
//!
//! Writes a tone from parameters given on the command line.

use anyhow::{Context, Result};
use sinewav_backend::SampleEncoding;
use sinewav_spec::ParamValues;
use std::process::ExitCode;

use super::json_output::JsonError;
use super::reporting::{fail_json, write_human, write_json};

/// Source label used in JSON output.
const SOURCE: &str = "cli";

/// Raw tone parameters from the command line.
///
/// Numbers stay signed so that `--duration -1` is reported as out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneArgs {
    /// Output filename
    pub output: String,
    /// Sample rate in Hz
    pub sample_rate: i64,
    /// Channel count
    pub channels: i64,
    /// Tone frequency in Hz
    pub frequency: i64,
    /// Duration in seconds
    pub duration: i64,
}

impl ToneArgs {
    /// Converts the arguments into unvalidated parameter values.
    pub fn to_params(&self) -> ParamValues {
        ParamValues {
            output: Some(self.output.clone()),
            sample_rate: Some(self.sample_rate),
            channels: Some(self.channels),
            frequency: Some(self.frequency),
            duration: Some(self.duration),
        }
    }
}

/// Run the tone command
///
/// # Arguments
/// * `args` - Tone parameters
/// * `encoding` - Sample layout of the data chunk
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &ToneArgs, encoding: SampleEncoding, json_output: bool) -> Result<ExitCode> {
    let validated = args.to_params().validate();

    if json_output {
        return match validated {
            Ok((request, warnings)) => write_json(SOURCE, &request, &warnings, encoding),
            Err(err) => fail_json(SOURCE, JsonError::from(&err)),
        };
    }

    let (request, warnings) = validated.context("Invalid tone parameters")?;
    write_human(&request, &warnings, encoding)
}
