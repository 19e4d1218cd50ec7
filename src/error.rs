//! Error types for the extract_colors library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extract_colors operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for color extraction operations
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image file is missing, unreadable, or not a supported format
    #[error("Failed to decode image: {message}")]
    DecodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image decoded but no colors could be counted
    #[error("Could not extract colors from {}", path.display())]
    EmptyImageError { path: PathBuf },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Hex color string could not be parsed
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHexColor { value: String, reason: String },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExtractionError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// An empty image is reported to the user and the run still ends normally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractionError::EmptyImageError { .. })
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::DecodeError { .. } => {
                "Could not load the image. Please check the path and file format and try again."
                    .to_string()
            }
            ExtractionError::EmptyImageError { path } => {
                format!("Could not extract colors from {}", path.display())
            }
            ExtractionError::InvalidParameter { parameter, value } => {
                format!("'{}' is not a valid value for {}.", value, parameter)
            }
            _ => "Color extraction failed.".to_string(),
        }
    }
}
