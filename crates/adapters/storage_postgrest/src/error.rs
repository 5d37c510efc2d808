//! Store-specific error type wrapping transport and PostgREST failures.

use reqwest::StatusCode;
use serde::Deserialize;
use shoewash_domain::error::ShoeWashError;

/// Errors originating from the PostgREST storage layer.
///
/// The `Display` form is what callers see, so [`StoreError::Api`] renders the
/// store's own message untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configured endpoint is not a usable URL.
    #[error("invalid store url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("{message}")]
    Api { message: String },

    /// A success response did not contain the expected rows.
    #[error("unexpected store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An insert returned no representation.
    #[error("store returned no row for the inserted item")]
    EmptyResponse,
}

/// Error object PostgREST puts in non-2xx response bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl StoreError {
    /// Build an [`StoreError::Api`] from a failed response.
    ///
    /// Prefers PostgREST's `message`, then the raw body, then the status
    /// reason phrase.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                tracing::debug!(
                    %status,
                    code = ?parsed.code,
                    details = ?parsed.details,
                    hint = ?parsed.hint,
                    "store rejected request"
                );
                Self::Api {
                    message: parsed.message,
                }
            }
            Err(_) => {
                tracing::debug!(%status, "store rejected request with a non-PostgREST body");
                let raw = body.trim();
                let message = if raw.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("store request failed")
                        .to_string()
                } else {
                    raw.to_string()
                };
                Self::Api { message }
            }
        }
    }
}

impl From<StoreError> for ShoeWashError {
    fn from(err: StoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}
