//! Error types for LLM operations

use thiserror::Error;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur during LLM classification
#[derive(Error, Debug)]
pub enum LlmError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Unexpected response format from the API
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// The model's output is not the expected classification payload
    #[error("Malformed classification payload: {0}")]
    MalformedPayload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Prompt template error
    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),
}

/// Convert LlmError to support_core::Error
///
/// Every LLM failure surfaces to the router as a classification failure;
/// the router recovers via its degraded fallback path.
impl From<LlmError> for support_core::Error {
    fn from(err: LlmError) -> Self {
        support_core::Error::Classification(err.to_string())
    }
}
