use omdb_client::OmdbError;
use thiserror::Error;

/// Errors surfaced by the discovery layer
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Transport, HTTP status or undecodable body; forwarded as is
    #[error(transparent)]
    Upstream(#[from] OmdbError),

    /// The upstream answered a detail lookup with a logical failure
    #[error("Movie {id} not found: {message}")]
    NotFound { id: String, message: String },

    #[error("Unexpected upstream response for {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
