//! Error types for story sources.

use thiserror::Error;

/// Ways a fetch can be rejected.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("Unexpected status {status}")]
    Status { status: u16 },

    /// The body was not a story list.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL does not parse.
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The source refused without reaching any transport.
    #[error("Source unavailable: {reason}")]
    Unavailable { reason: String },
}
