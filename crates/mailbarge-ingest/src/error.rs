//! Error types for the ingestion pipeline
//!
//! Per-file and per-batch failures are recovered locally by the pipeline and
//! surface only through logs; these types exist for the submission path and
//! for fatal startup conditions.

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Error type for the ingestion pipeline
#[derive(Error, Debug)]
pub enum IngestError {
    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and the corpus path.")]
    Io(#[from] std::io::Error),

    /// HTTP request could not be sent or completed
    #[error("Network request failed: {0}. Check the destination URL and your connection.")]
    Http(#[from] reqwest::Error),

    /// Record could not be serialized for the wire
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Destination rejected a submission; the batch's records are lost
    #[error("Submission rejected by destination: status={status} body={body}")]
    Submission { status: u16, body: String },

    /// Configuration is missing or invalid; fatal at startup
    #[error("Configuration error: {0}. Check your environment variables and CLI flags.")]
    Config(String),
}

impl IngestError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
