//! Error handling for the signal simulator.

use thiserror::Error;

/// Main error type for the signal simulator.
///
/// The first five kinds are the ingestion taxonomy; each is terminal for the
/// submission that produced it and none is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Inference response body is not a valid JSON envelope
    #[error("Malformed inference envelope: {0}")]
    MalformedEnvelope(String),

    /// Nested `result` string is not a valid JSON signal payload
    #[error("Malformed signal payload: {0}")]
    MalformedPayload(String),

    /// One of the five required signal fields is missing or empty
    #[error("Incomplete signal: {0}")]
    IncompleteSignal(String),

    /// Inference service failed at transport level or returned a non-success status
    #[error("Inference service unreachable: {0}")]
    InferenceUnreachable(String),

    /// Processing service failed at transport level, returned a non-success
    /// status, or produced an undecodable body
    #[error("Signal processing failed: {0}")]
    ProcessingFailed(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

/// Result type for the signal simulator
pub type Result<T> = std::result::Result<T, Error>;

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}
