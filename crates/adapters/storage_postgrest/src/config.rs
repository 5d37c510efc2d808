//! Store connection configuration.

use serde::Deserialize;

use crate::client::PostgrestClient;
use crate::error::StoreError;

/// Configuration for the PostgREST storage adapter.
///
/// Nothing is validated here: an empty or malformed `url` or `key` yields a
/// client whose first request fails with a [`StoreError`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project URL (e.g. `https://xyzcompany.supabase.co`).
    pub url: String,
    /// API key sent as both `apikey` and bearer token.
    pub key: String,
    /// Table holding the items.
    pub table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            table: "items".to_string(),
        }
    }
}

impl Config {
    /// `true` when both the endpoint and the key are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    /// Build a [`PostgrestClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying HTTP client cannot be
    /// initialised (e.g. no TLS backend).
    pub fn build(self) -> Result<PostgrestClient, StoreError> {
        PostgrestClient::new(self)
    }
}
