use crate::OmdbError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Upstream API configuration, driven by environment variables.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl OmdbConfig {
    /// Read `OMDB_API_KEY`, `OMDB_BASE_URL` and `OMDB_TIMEOUT_MS`.
    ///
    /// Missing variables fall back to defaults; a missing key is not an
    /// error here, `is_valid` reports it. Only an unparseable timeout fails.
    pub fn from_env() -> Result<Self, OmdbError> {
        let api_key = env::var("OMDB_API_KEY").unwrap_or_default();

        let base_url = env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match env::var("OMDB_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                OmdbError::InvalidConfig(format!("OMDB_TIMEOUT_MS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout_ms,
        })
    }

    /// Both the API key and the base URL must be non-empty
    pub fn is_valid(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.base_url.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for OmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("OmdbConfig")
            .field("api_key", &key)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
