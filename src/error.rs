//! Error types for the metar-reader application.
//!
//! This module defines a single error enum that covers report parsing
//! failures as well as the configuration and server errors raised while
//! running the HTTP service.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for metar-reader operations.
#[derive(Error, Debug)]
pub enum MetarError {
    /// The mandatory airport code and observation time could not be located
    #[error("Malformed report: could not find airport code and observation time")]
    MalformedReport,

    /// The report does not follow the fixed field order the narrative formatter needs
    #[error("Report does not match the expected field order")]
    NoMatch,

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl MetarError {
    /// HTTP status a handler should answer with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MetarError::MalformedReport
            | MetarError::NoMatch
            | MetarError::InvalidParameter { .. }
            | MetarError::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with MetarError
pub type Result<T> = std::result::Result<T, MetarError>;
