//! Error types for support-core

use thiserror::Error;

/// Result type alias for support-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for router operations
#[derive(Error, Debug)]
pub enum Error {
    /// Classifier collaborator failed (transport failure or malformed output)
    #[error("classification failed: {0}")]
    Classification(String),

    /// Downstream handler failed
    #[error("handler failed: {0}")]
    Handler(String),

    /// Session store failure
    #[error("session error: {0}")]
    Session(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}
