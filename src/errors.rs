//! Error types for HealthArchitect
//!
//! Central error enum for the plan pipeline. Every fallible public
//! operation in the crate returns [`Result`].

use thiserror::Error;

/// Main error type for the plan generation pipeline
#[derive(Error, Debug)]
pub enum PlanError {
    /// Model API errors (server unreachable, error status, bad payload)
    #[error("Model API error: {0}")]
    ApiError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The model response could not be turned into a plan
    #[error("Model response is not a valid plan: {0}")]
    ResponseParseError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Profile validation errors
    #[error("Invalid profile: {0}")]
    ProfileError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// PDF backend errors
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanError::ApiError("HTTP 429".to_string());
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_profile_error_display() {
        let err = PlanError::ProfileError("age 9 out of range 10-100".to_string());
        assert!(err.to_string().contains("age 9"));
        assert!(err.to_string().contains("Invalid profile"));
    }
}
