//! # Extraction Error Types Module
//!
//! This module defines the error type used by the extractor and the batch runner.
//! A description without a unit or quantity is not an error; it is `None`.

use std::num::ParseFloatError;

/// Custom error types for extraction operations
#[derive(Debug)]
pub enum ExtractionError {
    /// A reconstructed quantity that should be numeric did not parse as `f64`
    QuantityNotNumeric {
        quantity: String,
        source: ParseFloatError,
    },
    /// Reading descriptions or writing results failed
    Io(std::io::Error),
    /// Invalid batch configuration value
    Config(String),
    /// Encoding an output record failed
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::QuantityNotNumeric { quantity, source } => {
                write!(f, "Quantity '{quantity}' is not a number: {source}")
            }
            ExtractionError::Io(err) => write!(f, "I/O error: {err}"),
            ExtractionError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ExtractionError::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::QuantityNotNumeric { source, .. } => Some(source),
            ExtractionError::Io(err) => Some(err),
            ExtractionError::Serialization(err) => Some(err),
            ExtractionError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(err: std::io::Error) -> Self {
        ExtractionError::Io(err)
    }
}

impl From<serde_json::Error> for ExtractionError {
    fn from(err: serde_json::Error) -> Self {
        ExtractionError::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let source = "12,500".parse::<f64>().unwrap_err();
        let err = ExtractionError::QuantityNotNumeric {
            quantity: "12,500".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Quantity '12,500' is not a number"));

        let err = ExtractionError::Config("bad format".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad format");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: ExtractionError = io.into();
        assert!(matches!(err, ExtractionError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
