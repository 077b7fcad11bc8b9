//! sinewav CLI - Command-line interface for sine tone WAV generation
//!
//! This binary writes single-tone PCM WAV files from a parameter file or from
//! command-line flags, and inspects existing WAV headers.

use clap::{Parser, Subcommand};
use sinewav_backend::SampleEncoding;
use sinewav_spec::params::DEFAULT_PARAMS_FILE;
use std::process::ExitCode;

// Use modules from the library crate
use sinewav_cli::commands;
use sinewav_cli::commands::tone::ToneArgs;

/// sinewav - Sine Tone WAV Generator
#[derive(Parser)]
#[command(name = "sinewav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a tone described by a parameter file
    Generate {
        /// Path to the parameter file (five-line text, or JSON with a .json extension)
        #[arg(short, long, default_value = DEFAULT_PARAMS_FILE)]
        params: String,

        /// Write 2-byte samples per channel instead of 4-byte reference slots
        #[arg(long)]
        pcm16: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write a tone from parameters given on the command line
    Tone {
        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Sample rate in Hz
        #[arg(short = 'r', long, allow_negative_numbers = true)]
        sample_rate: i64,

        /// Number of channels
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        channels: i64,

        /// Tone frequency in Hz
        #[arg(short, long, allow_negative_numbers = true)]
        frequency: i64,

        /// Duration in seconds
        #[arg(short, long, allow_negative_numbers = true)]
        duration: i64,

        /// Write 2-byte samples per channel instead of 4-byte reference slots
        #[arg(long)]
        pcm16: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields and sample layout of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn encoding(pcm16: bool) -> SampleEncoding {
    if pcm16 {
        SampleEncoding::Pcm16
    } else {
        SampleEncoding::Reference
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            params,
            pcm16,
            json,
        } => commands::generate::run(&params, encoding(pcm16), json),
        Commands::Tone {
            output,
            sample_rate,
            channels,
            frequency,
            duration,
            pcm16,
            json,
        } => {
            let args = ToneArgs {
                output,
                sample_rate,
                channels,
                frequency,
                duration,
            };
            commands::tone::run(&args, encoding(pcm16), json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
