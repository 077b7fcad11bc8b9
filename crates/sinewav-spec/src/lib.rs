//! sinewav Tone Parameter Library
//!
//! This crate provides the input side of sinewav: the [`AudioSpec`] consumed by
//! the synthesis backend, field validation, and loading of parameter files.
//!
//! # Example
//!
//! ```
//! use sinewav_spec::params::parse_text;
//! use sinewav_spec::AudioSpec;
//!
//! let (request, warnings) = parse_text("tone.wav\n44100\n1\n440\n2\n").unwrap();
//! assert_eq!(request.spec, AudioSpec::mono(44100, 440, 2));
//! assert_eq!(request.spec.total_sample_count(), 88200);
//! assert!(warnings.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`params`]: Text and JSON parameter file loading
//! - [`spec`]: Tone parameter types
//! - [`validation`]: Field-level checks shared by every input source

pub mod error;
pub mod params;
pub mod spec;
pub mod validation;

pub use error::{ErrorCode, ParamsError, ValidationError, ValidationWarning, WarningCode};
pub use params::{load_params, LoadResult, SourceKind};
pub use spec::{AudioSpec, ParamValues, ToneRequest};
pub use validation::Field;
