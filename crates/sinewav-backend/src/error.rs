//! Error types for the tone backend.

use std::path::PathBuf;

use sinewav_spec::ValidationError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while writing a tone.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The tone parameters failed validation.
    #[error("invalid tone parameters: {0}")]
    InvalidSpec(#[from] ValidationError),

    /// The output file could not be created, written, or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an output error for `path`.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSpec(_) => "AUDIO_001",
            AudioError::Output { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }

    /// Error category.
    pub fn category(&self) -> &'static str {
        "audio"
    }
}
