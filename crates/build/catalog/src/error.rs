//! Error types raised by the catalog client.

use thiserror::Error;

/// Errors surfaced while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the response body not read.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("failed to parse catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
