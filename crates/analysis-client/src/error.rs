//! Error types for analysis-client

use thiserror::Error;

/// Errors that can occur while talking to the analysis capability
#[derive(Error, Debug)]
pub enum ClientError {
    /// API credential missing from the environment and `.env`
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingApiKey,

    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status
    #[error("analysis API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The reply carried no message content
    #[error("analysis reply contained no message content")]
    EmptyReply,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err.to_string())
    }
}
