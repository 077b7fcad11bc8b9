//! sinewav CLI library.
//!
//! This crate provides the command implementations behind the `sinewav`
//! binary: loading parameter files, writing tones, and inspecting WAV files.

pub mod commands;
