//! Domain error types
//!
//! This module defines the error hierarchy for tabmask. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main tabmask error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TabmaskError {
    /// Parse failures from either codec
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration-related errors (profile file, env overrides)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Parse-specific errors
///
/// All parse failures are terminal for that parse call; there is no
/// partial-dataset recovery. Rows with a mismatched field count in
/// delimited input are skipped and counted, not reported here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input contained no lines or bytes at all
    #[error("Input is empty")]
    EmptyInput,

    /// Delimited header row yielded zero columns
    #[error("Invalid header row")]
    InvalidHeader,

    /// Every data row was skipped, or the object array was empty
    #[error("No data rows found")]
    NoDataRows,

    /// Structured input is not an array of flat objects
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// Declared format does not match any codec
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TabmaskError {
    fn from(err: std::io::Error) -> Self {
        TabmaskError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TabmaskError {
    fn from(err: serde_json::Error) -> Self {
        TabmaskError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TabmaskError {
    fn from(err: toml::de::Error) -> Self {
        TabmaskError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::EmptyInput.to_string(), "Input is empty");
        assert_eq!(
            ParseError::UnsupportedFormat("xml".to_string()).to_string(),
            "Unsupported format: xml"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: TabmaskError = ParseError::NoDataRows.into();
        assert!(matches!(err, TabmaskError::Parse(ParseError::NoDataRows)));
        assert_eq!(err.to_string(), "Parse error: No data rows found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TabmaskError = io_err.into();
        assert!(matches!(err, TabmaskError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: TabmaskError = json_err.into();
        assert!(matches!(err, TabmaskError::Serialization(_)));
    }

    #[test]
    fn test_tabmask_error_implements_std_error() {
        let err = TabmaskError::Configuration("bad profile".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
