//! Error types for the catalog crate.
//!
//! Record content never produces an error: missing or sentinel values are
//! replaced with defaults by the normalizer. Only a payload that cannot be
//! recognized as an upstream response at all is rejected here.

use thiserror::Error;

/// Errors that can occur while decoding upstream payloads
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The body was not valid JSON, or a known shape failed to deserialize
    #[error("Malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but neither a search page, a single item nor a failure
    #[error("Unrecognized upstream payload: {reason}")]
    UnexpectedShape { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
