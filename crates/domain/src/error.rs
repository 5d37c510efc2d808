//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ShoeWashError`] via `From`.

/// Top-level error for every use-case.
#[derive(Debug, thiserror::Error)]
pub enum ShoeWashError {
    /// The request was rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup by id matched nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store reported a failure.
    #[error("{0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected by domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `customer_name` or `service_type` was missing or empty on create.
    #[error("customer name and service type are required")]
    MissingRequiredFields,

    /// An item id was empty.
    #[error("item id must not be empty")]
    EmptyId,

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    MalformedBody(String),

    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    MalformedQuery(String),
}

/// No record matched the requested id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// The id that was requested.
    pub id: String,
}
