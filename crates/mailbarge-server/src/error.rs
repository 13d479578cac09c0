//! Error types for the search proxy

use thiserror::Error;

/// Result type alias for proxy operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error type for the search proxy
#[derive(Error, Debug)]
pub enum ServerError {
    /// HTTP request to the indexing service could not be completed
    #[error("Network request failed: {0}. Check the destination URL and your connection.")]
    Http(#[from] reqwest::Error),

    /// Indexing service answered with a non-OK status
    #[error("Destination search failed: status={status} body={body}")]
    Upstream { status: u16, body: String },
}
