//! Error types for the Gemini adapter

use muse_application::ports::oracle::OracleError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when communicating with the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to decode inline data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Response contained no image data")]
    NoImagePart,
}

impl From<GeminiError> for OracleError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::EmptyResponse => OracleError::EmptyResponse,
            GeminiError::NoImagePart => OracleError::NoImagePart,
            other => OracleError::Unavailable(other.to_string()),
        }
    }
}
