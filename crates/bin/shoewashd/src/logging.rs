//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Logging initialisation errors.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive did not parse.
    #[error("invalid log filter `{filter}`")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Build an [`EnvFilter`] from a `RUST_LOG`-style directive.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the directive is malformed.
pub fn filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        source,
    })
}

/// Install the global fmt subscriber.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the directive is malformed.
pub fn init(directive: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_target(true)
        .init();
    Ok(())
}
