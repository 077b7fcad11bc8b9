//! Error types for tone parameter validation and loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Field;

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A required value is absent or empty
    MissingValue,
    /// E002: A numeric value is zero, negative, or too large for its field
    InvalidRange,
    /// E003: A numeric value could not be parsed as an integer
    InvalidNumber,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MissingValue => "E001",
            ErrorCode::InvalidRange => "E002",
            ErrorCode::InvalidNumber => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Output filename does not end with `.wav`
    MissingWavExtension,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MissingWavExtension => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// The parameter that failed validation.
    pub field: Field,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, field: Field, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field,
        }
    }

    /// Creates a missing-value error for `field`.
    pub fn missing(field: Field) -> Self {
        Self::new(
            ErrorCode::MissingValue,
            field,
            format!("{} must not be empty", field.label()),
        )
    }

    /// Creates an out-of-range error for `field`.
    pub fn out_of_range(field: Field, value: i64) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            field,
            format!(
                "{} must be between 1 and {}, got {}",
                field.label(),
                field.max_value(),
                value
            ),
        )
    }

    /// Creates a not-a-number error for `field`.
    pub fn not_a_number(field: Field, raw: &str) -> Self {
        Self::new(
            ErrorCode::InvalidNumber,
            field,
            format!("{} must be an integer, got '{}'", field.label(), raw),
        )
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (at {})", self.code, self.message, self.field)
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning. Warnings never stop generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// The parameter the warning refers to.
    pub field: Field,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, field: Field, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field,
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (at {})", self.code, self.message, self.field)
    }
}

/// Errors raised while loading a parameter file.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read.
    #[error("failed to read parameter file {}: {source}", path.display())]
    Read {
        /// Path of the parameter file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON parameter file is malformed.
    #[error("invalid JSON parameter file: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ParamsError {
    /// Returns the validation error code if this is a validation failure.
    pub fn validation_code(&self) -> Option<ErrorCode> {
        match self {
            ParamsError::Invalid(err) => Some(err.code),
            _ => None,
        }
    }
}
