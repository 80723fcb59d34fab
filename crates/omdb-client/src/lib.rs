//! HTTP client for the OMDb catalog API.
//!
//! This crate provides the thin upstream collaborator the discovery layer
//! talks to. It handles:
//! - Configuration (API key, base URL, timeout) from the environment
//! - Building `?s=` searches and `?i=` / `?t=` lookups
//! - Mapping transport failures and non-2xx statuses to `OmdbError`
//! - Decoding bodies into the `catalog::OmdbResponse` tagged union
//!
//! No retries and no caching: one call, one upstream request.

pub mod config;

pub use config::{OmdbConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

use catalog::{CatalogError, OmdbResponse};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur when talking to the upstream API
#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("Invalid OMDb configuration: {0}")]
    InvalidConfig(String),

    /// Network unreachable, timeout, TLS, ...
    #[error("Request to OMDb failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response from OMDb: {0}")]
    Payload(#[from] CatalogError),
}

/// How much plot text a lookup returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plot {
    #[default]
    Short,
    Full,
}

impl Plot {
    fn as_param(&self) -> &'static str {
        match self {
            Plot::Short => "short",
            Plot::Full => "full",
        }
    }
}

/// Parameters of a `?s=` title search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    /// `movie`, `series` or `episode`
    pub kind: Option<String>,
    pub year: Option<i32>,
    /// 1-based; the upstream serves 10 results per page
    pub page: Option<u32>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("s", self.term.clone())];
        if let Some(kind) = &self.kind {
            params.push(("type", kind.clone()));
        }
        if let Some(year) = self.year {
            params.push(("y", year.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

/// Parameters of a single-title lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    ById { id: String, plot: Plot },
    ByTitle { title: String, plot: Plot },
}

impl LookupQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            LookupQuery::ById { id, plot } => {
                vec![("i", id.clone()), ("plot", plot.as_param().to_string())]
            }
            LookupQuery::ByTitle { title, plot } => {
                vec![("t", title.clone()), ("plot", plot.as_param().to_string())]
            }
        }
    }
}

/// Client for the OMDb API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Build a client from configuration.
    ///
    /// Fails with `InvalidConfig` when the key or base URL is empty.
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        if !config.is_valid() {
            return Err(OmdbError::InvalidConfig(
                "an API key and a base URL are required".to_string(),
            ));
        }

        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `GET base_url?apikey=...&<params>` and parse the JSON body.
    ///
    /// Non-2xx statuses become `OmdbError::Status` carrying the body text.
    /// A 200 with `Response: "False"` is NOT an error at this level.
    pub async fn get(&self, params: &[(&str, String)]) -> Result<Value, OmdbError> {
        debug!("OMDb request: {:?}", params);

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("apikey", self.api_key.as_str()));
        query.extend(params.iter().map(|(key, value)| (*key, value.as_str())));

        let response = self.http.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("OMDb returned HTTP {}: {}", status.as_u16(), message);
            return Err(OmdbError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body).map_err(CatalogError::from)?;
        Ok(value)
    }

    /// Run a title search and decode the response
    pub async fn search(&self, query: &SearchQuery) -> Result<OmdbResponse, OmdbError> {
        let value = self.get(&query.params()).await?;
        Ok(OmdbResponse::decode(value)?)
    }

    /// Look up one title and decode the response
    pub async fn lookup(&self, query: &LookupQuery) -> Result<OmdbResponse, OmdbError> {
        let value = self.get(&query.params()).await?;
        Ok(OmdbResponse::decode(value)?)
    }
}
