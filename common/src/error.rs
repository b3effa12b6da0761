//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The selected file is not an image or could not be read.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The extraction collaborator reported a failure.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Clipboard or download was denied by the environment.
    #[error("Export failed: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let error = Error::InvalidInput("only image files are supported".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Invalid input: only image files are supported");
    }

    #[test]
    fn test_error_display_extraction() {
        let error = Error::Extraction("service timed out".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Extraction failed"));
        assert!(display.contains("service timed out"));
    }

    #[test]
    fn test_error_display_export() {
        let error = Error::Export("clipboard permission denied".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Export failed"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Extraction("boom".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Extraction"));
        assert!(debug.contains("boom"));
    }
}
