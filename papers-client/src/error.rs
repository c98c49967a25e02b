use std::result;

use thiserror::Error;

/// Error types for paper search and summary operations
///
/// Variants fall into two families:
///
/// * fetch errors: [`PubMedError::RequestError`] and [`PubMedError::ApiError`]
/// * parse errors: [`PubMedError::Parse`]
///
/// The remaining variants are only produced by the output writers in
/// [`crate::export`].
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Upstream API answered with a non-success status or an error payload
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PubMedError {
    /// Whether this error came from the transport or an HTTP status
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            PubMedError::RequestError(_) | PubMedError::ApiError { .. }
        )
    }

    /// Whether this error came from an unexpected response body
    pub fn is_parse_error(&self) -> bool {
        matches!(self, PubMedError::Parse(_))
    }
}

impl From<serde_json::Error> for PubMedError {
    fn from(err: serde_json::Error) -> Self {
        PubMedError::Parse(ParseError::JsonError(err))
    }
}

/// Error types for E-utilities response parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Expected top-level field was absent
    #[error("{endpoint} response is missing field `{field}`")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },
}

pub type Result<T> = result::Result<T, PubMedError>;
