//! Shared output for the commands that write a tone file.

use anyhow::{Context, Result};
use colored::Colorize;
use sinewav_backend::{generate, SampleEncoding};
use sinewav_spec::{ToneRequest, ValidationWarning};
use std::process::ExitCode;

use super::json_output::{GenerateOutput, JsonError, JsonWarning, ToneFileJson};

/// Prints advisory warnings to stderr.
pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        eprintln!(
            "  {} [{}] {}",
            "!".yellow(),
            warning.code,
            warning.message
        );
    }
}

/// Writes the tone and reports progress as colored text.
pub(crate) fn write_human(
    request: &ToneRequest,
    warnings: &[ValidationWarning],
    encoding: SampleEncoding,
) -> Result<ExitCode> {
    print_warnings(warnings);

    let spec = &request.spec;
    println!(
        "{} {}",
        "Generating:".cyan().bold(),
        request.output().display()
    );
    println!(
        "  {} {} Hz, {} channel(s), {} Hz tone, {} s, {} samples",
        "Tone:".dimmed(),
        spec.sample_rate,
        spec.channels,
        spec.frequency,
        spec.duration_seconds,
        spec.total_sample_count()
    );
    println!("  {} {}", "Encoding:".dimmed(), encoding);

    let result = generate(request, encoding)
        .with_context(|| format!("Failed to write tone: {}", request.output().display()))?;

    println!(
        "{} Wrote {} bytes to {}",
        "SUCCESS".green().bold(),
        result.bytes_written,
        result.path.display()
    );
    println!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Writes the tone and prints a JSON summary.
pub(crate) fn write_json(
    source: &str,
    request: &ToneRequest,
    warnings: &[ValidationWarning],
    encoding: SampleEncoding,
) -> Result<ExitCode> {
    let json_warnings: Vec<JsonWarning> = warnings.iter().map(JsonWarning::from).collect();

    let (output, code) = match generate(request, encoding) {
        Ok(result) => (
            GenerateOutput::success(source, ToneFileJson::from(&result), json_warnings),
            ExitCode::SUCCESS,
        ),
        Err(err) => (
            GenerateOutput::failure(source, vec![JsonError::from(&err)], json_warnings),
            ExitCode::from(1),
        ),
    };

    print_json(&output)?;
    Ok(code)
}

/// Prints a failure document for errors raised before anything was written.
pub(crate) fn fail_json(source: &str, error: JsonError) -> Result<ExitCode> {
    print_json(&GenerateOutput::failure(source, vec![error], Vec::new()))?;
    Ok(ExitCode::from(1))
}

/// Pretty-prints any serializable value to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
