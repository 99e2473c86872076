//! Error types for FitLine
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Main error type for FitLine operations
#[derive(Error, Debug)]
pub enum FitError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Input table has fewer than two columns
    #[error("Dataset must have at least two columns, found {found}")]
    TooFewColumns { found: usize },

    /// Upstream parse failure, opaque to the core
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Fewer valid points than an operation needs
    #[error("Insufficient data: at least {required} valid points required, found {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Focus-by-number request outside the current batch
    #[error("Invalid trial number: enter a number between 1 and {max}")]
    InvalidTrialNumber { max: usize },
}

/// Result type alias for FitLine operations
pub type Result<T> = std::result::Result<T, FitError>;

/// UI-friendly error message formatting
impl FitError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            FitError::FileIo(e) => format!("File error: {}", e),
            FitError::Polars(e) => format!("CSV parsing error: {}", e),
            FitError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            FitError::TooFewColumns { found } => {
                format!("CSV must have at least two columns (found {})", found)
            }
            FitError::MalformedInput(msg) => msg.clone(),
            FitError::InsufficientData { required, actual } => {
                format!(
                    "Insufficient valid data points: {} required with numerical X and Y, found {}",
                    required, actual
                )
            }
            FitError::InvalidTrialNumber { max } => {
                format!("Invalid trial number. Please enter a number between 1 and {}.", max)
            }
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            FitError::FileIo(_) => "File Error",
            FitError::Polars(_) => "CSV Error",
            FitError::UnsupportedFormat { .. } => "Unsupported Format",
            FitError::TooFewColumns { .. } => "Too Few Columns",
            FitError::MalformedInput(_) => "Malformed Input",
            FitError::InsufficientData { .. } => "Insufficient Data",
            FitError::InvalidTrialNumber { .. } => "Invalid Trial Number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FitError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.user_message(),
            "Insufficient valid data points: 2 required with numerical X and Y, found 1"
        );
        assert_eq!(err.title(), "Insufficient Data");

        let err = FitError::InvalidTrialNumber { max: 50 };
        assert_eq!(
            err.user_message(),
            "Invalid trial number. Please enter a number between 1 and 50."
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fit_err: FitError = io_err.into();
        assert!(matches!(fit_err, FitError::FileIo(_)));
    }
}
