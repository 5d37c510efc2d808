//! Thin PostgREST client scoped to one table.

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::StoreError;

/// `Prefer` header asking PostgREST to echo affected rows back.
const RETURN_REPRESENTATION: &str = "return=representation";

/// Configured handle to the remote table service.
///
/// Constructed once at startup and shared read-only between requests. The
/// inner [`Client`] keeps its own connection pool.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: Client,
    config: Config,
}

impl PostgrestClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the HTTP client cannot be initialised.
    pub fn new(config: Config) -> Result<Self, StoreError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Resolve `<url>/rest/v1/<table>`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] when the configured URL does not parse.
    pub fn table_url(&self) -> Result<Url, StoreError> {
        let raw = format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        );
        Url::parse(&raw).map_err(|err| StoreError::InvalidUrl {
            url: self.config.url.clone(),
            reason: err.to_string(),
        })
    }

    /// Start a request against the table with the given query pairs.
    ///
    /// Values are percent-encoded; the access key is attached both as
    /// `apikey` and as a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] when the configured URL does not parse.
    pub fn request(
        &self,
        method: Method,
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder, StoreError> {
        let mut url = self.table_url()?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        tracing::debug!(%method, %url, "store request");
        Ok(self
            .http
            .request(method, url)
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key))
    }

    /// Like [`request`](Self::request) but asks for the affected rows back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] when the configured URL does not parse.
    pub fn returning(
        &self,
        method: Method,
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder, StoreError> {
        Ok(self
            .request(method, query)?
            .header("Prefer", RETURN_REPRESENTATION))
    }

    /// Send a request and fail on any non-2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] on transport failure, including a failed
    /// read of an error body, or [`StoreError::Api`] when the store rejects
    /// the request.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(StoreError::from_response(status, &body))
    }

    /// Send a request and decode the JSON row array it returns.
    ///
    /// # Errors
    ///
    /// Returns any error from [`send`](Self::send), or
    /// [`StoreError::Decode`] when the body is not the expected rows.
    pub async fn fetch_rows<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, StoreError> {
        let bytes = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Render a PostgREST equality filter value (`eq.<value>`).
#[must_use]
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}
