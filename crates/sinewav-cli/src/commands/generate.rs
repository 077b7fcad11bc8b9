//! Generate command implementation
//!
//! Reads a parameter file (text or JSON) and writes the tone it describes.

use anyhow::{Context, Result};
use colored::Colorize;
use sinewav_backend::SampleEncoding;
use sinewav_spec::{load_params, LoadResult, SourceKind};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::JsonError;
use super::reporting::{fail_json, write_human, write_json};

/// Run the generate command
///
/// # Arguments
/// * `params_path` - Path to the parameter file
/// * `encoding` - Sample layout of the data chunk
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(params_path: &str, encoding: SampleEncoding, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(params_path, encoding)
    } else {
        run_human(params_path, encoding)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(params_path: &str, encoding: SampleEncoding) -> Result<ExitCode> {
    println!("{} {}", "Loading parameters:".cyan().bold(), params_path);

    let LoadResult {
        request,
        source_kind,
        warnings,
    } = load_params(Path::new(params_path))
        .with_context(|| format!("Failed to load parameter file: {}", params_path))?;

    println!("  {} {}", "Format:".dimmed(), source_kind);

    write_human(&request, &warnings, encoding)
}

/// Run generate with JSON output
fn run_json(params_path: &str, encoding: SampleEncoding) -> Result<ExitCode> {
    let path = Path::new(params_path);
    match load_params(path) {
        Ok(LoadResult {
            request,
            source_kind,
            warnings,
        }) => write_json(source_kind.as_str(), &request, &warnings, encoding),
        Err(err) => fail_json(SourceKind::from_path(path).as_str(), JsonError::from(&err)),
    }
}
