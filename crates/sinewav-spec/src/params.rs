//! Parameter file loading.
//!
//! Two formats are supported and dispatched by file extension:
//!
//! - **Text** (any extension other than `.json`): five lines, in order,
//!   holding the output filename, sample rate, channel count, tone frequency
//!   and duration. Lines after the fifth are ignored.
//! - **JSON** (`.json`): an object with the keys `output`, `sample_rate`,
//!   `channels`, `frequency` and `duration`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParamsError, ValidationError, ValidationWarning};
use crate::spec::{ParamValues, ToneRequest};
use crate::validation::{check_output_name, parse_integer, require_positive, Field};

/// Default parameter file name used when none is given.
pub const DEFAULT_PARAMS_FILE: &str = "Prueba.txt";

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Identifies the format of a parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Line-oriented text file.
    Text,
    /// JSON object.
    Json,
}

impl SourceKind {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                JSON_EXTENSIONS
                    .iter()
                    .any(|json| ext.eq_ignore_ascii_case(json))
            })
            .unwrap_or(false);
        if is_json {
            SourceKind::Json
        } else {
            SourceKind::Text
        }
    }

    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::Json => "json",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of loading a parameter file.
#[derive(Debug)]
pub struct LoadResult {
    /// The validated request.
    pub request: ToneRequest,
    /// Source format.
    pub source_kind: SourceKind,
    /// Advisory warnings (e.g. missing `.wav` extension).
    pub warnings: Vec<ValidationWarning>,
}

/// Loads and validates a parameter file.
pub fn load_params(path: &Path) -> Result<LoadResult, ParamsError> {
    let content = fs::read_to_string(path).map_err(|source| ParamsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let source_kind = SourceKind::from_path(path);
    let (request, warnings) = match source_kind {
        SourceKind::Text => parse_text(&content)?,
        SourceKind::Json => parse_json(&content)?,
    };

    Ok(LoadResult {
        request,
        source_kind,
        warnings,
    })
}

/// Parses the line-oriented parameter format.
///
/// Fields are checked in file order and the first failure is returned, so an
/// empty sample rate is reported even if a later line is not a number.
pub fn parse_text(content: &str) -> Result<(ToneRequest, Vec<ValidationWarning>), ValidationError> {
    let mut lines = content.lines();

    let output = lines.next();
    check_output_name(output)?;

    let mut values = ParamValues {
        output: output.map(|line| line.trim().to_string()),
        ..ParamValues::default()
    };

    for field in &Field::ALL[1..] {
        let value = parse_integer(*field, lines.next())?;
        require_positive(*field, Some(value))?;
        match field {
            Field::SampleRate => values.sample_rate = Some(value),
            Field::Channels => values.channels = Some(value),
            Field::Frequency => values.frequency = Some(value),
            Field::Duration => values.duration = Some(value),
            Field::Output => {}
        }
    }

    values.validate()
}

/// Parses the JSON parameter format.
pub fn parse_json(content: &str) -> Result<(ToneRequest, Vec<ValidationWarning>), ParamsError> {
    let values: ParamValues = serde_json::from_str(content)?;
    Ok(values.validate()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, WarningCode};
    use crate::spec::AudioSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_kind_from_path() {
        assert_eq!(SourceKind::from_path(Path::new("p.json")), SourceKind::Json);
        assert_eq!(SourceKind::from_path(Path::new("p.JSON")), SourceKind::Json);
        assert_eq!(SourceKind::from_path(Path::new("Prueba.txt")), SourceKind::Text);
        assert_eq!(SourceKind::from_path(Path::new("params")), SourceKind::Text);
    }

    #[test]
    fn test_parse_text() {
        let (request, warnings) = parse_text("tone.wav\n8000\n1\n440\n1\n").unwrap();
        assert_eq!(request.output(), Path::new("tone.wav"));
        assert_eq!(request.spec, AudioSpec::mono(8000, 440, 1));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_text_crlf_and_trailing_lines() {
        let (request, _) = parse_text("a.wav\r\n44100\r\n2\r\n440\r\n3\r\nextra\r\n").unwrap();
        assert_eq!(request.spec, AudioSpec::new(44100, 2, 440, 3));
    }

    #[test]
    fn test_parse_text_missing_extension_warns() {
        let (_, warnings) = parse_text("tone\n8000\n1\n440\n1").unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::MissingWavExtension);
    }

    #[test]
    fn test_parse_text_errors() {
        let err = parse_text("\n8000\n1\n440\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::MissingValue, Field::Output));

        let err = parse_text("t.wav\n0\n1\n440\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::InvalidRange, Field::SampleRate));

        let err = parse_text("t.wav\n8000\n1\n440\n-1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::InvalidRange, Field::Duration));

        let err = parse_text("t.wav\n8000\n1\nla\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::InvalidNumber, Field::Frequency));

        let err = parse_text("t.wav\n8000\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::MissingValue, Field::Frequency));
    }

    #[test]
    fn test_parse_text_channel_limit() {
        let (request, _) = parse_text("t.wav\n8000\n32767\n440\n1").unwrap();
        assert_eq!(request.spec.channels, 32767);

        let err = parse_text("t.wav\n8000\n32768\n440\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::InvalidRange, Field::Channels));
    }

    #[test]
    fn test_parse_text_reports_earliest_field() {
        let err = parse_text("t.wav\n\n1\nla\n1").unwrap_err();
        assert_eq!((err.code, err.field), (ErrorCode::MissingValue, Field::SampleRate));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"output":"tone.wav","sample_rate":44100,"channels":1,"frequency":440,"duration":2}"#;
        let (request, warnings) = parse_json(json).unwrap();
        assert_eq!(request.spec, AudioSpec::mono(44100, 440, 2));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_json_errors() {
        let err = parse_json(r#"{"output":"t.wav","sample_rate":8000,"channels":1,"frequency":440}"#)
            .unwrap_err();
        assert_eq!(err.validation_code(), Some(ErrorCode::MissingValue));

        let err = parse_json(r#"{"output":"t.wav","sample_rate":0}"#).unwrap_err();
        assert_eq!(err.validation_code(), Some(ErrorCode::InvalidRange));

        let err = parse_json(r#"{"output":"t.wav","volume":3}"#).unwrap_err();
        assert!(matches!(err, ParamsError::Json(_)));
    }

    #[test]
    fn test_load_params_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let text = tmp.path().join(DEFAULT_PARAMS_FILE);
        fs::write(&text, "tone.wav\n8000\n1\n440\n1\n").unwrap();
        let json = tmp.path().join("params.json");
        fs::write(
            &json,
            r#"{"output":"tone.wav","sample_rate":8000,"channels":1,"frequency":440,"duration":1}"#,
        )
        .unwrap();

        let from_text = load_params(&text).unwrap();
        let from_json = load_params(&json).unwrap();
        assert_eq!(from_text.source_kind, SourceKind::Text);
        assert_eq!(from_json.source_kind, SourceKind::Json);
        assert_eq!(from_text.request, from_json.request);
    }

    #[test]
    fn test_load_params_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_params(&tmp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ParamsError::Read { .. }));
    }
}
