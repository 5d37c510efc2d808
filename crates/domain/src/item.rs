//! Item: one shoe-cleaning job tracked by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ShoeWashError, ValidationError};
use crate::id::ItemId;

/// UTC timestamp the store assigns as `created_at`.
pub type Timestamp = DateTime<Utc>;

/// Status every item starts with, whatever the client sent.
pub const INITIAL_STATUS: &str = "Received";

/// A persisted cleaning job, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub customer_name: String,
    pub shoe_type: Option<String>,
    pub service_type: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Insert payload for a new [`Item`].
///
/// Only obtainable through [`NewItemBuilder::build`], so every value has
/// passed validation and carries [`INITIAL_STATUS`]. The store fills in
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    customer_name: String,
    shoe_type: Option<String>,
    service_type: String,
    status: String,
}

impl NewItem {
    /// Create a builder for constructing a [`NewItem`].
    #[must_use]
    pub fn builder() -> NewItemBuilder {
        NewItemBuilder::default()
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn shoe_type(&self) -> Option<&str> {
        self.shoe_type.as_deref()
    }

    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Step-by-step builder for [`NewItem`].
#[derive(Debug, Default)]
pub struct NewItemBuilder {
    customer_name: Option<String>,
    shoe_type: Option<String>,
    service_type: Option<String>,
}

impl NewItemBuilder {
    #[must_use]
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }

    #[must_use]
    pub fn shoe_type(mut self, shoe_type: impl Into<String>) -> Self {
        self.shoe_type = Some(shoe_type.into());
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewItem`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredFields`] if `customer_name`
    /// or `service_type` is missing or empty.
    pub fn build(self) -> Result<NewItem, ShoeWashError> {
        let customer_name = self.customer_name.unwrap_or_default();
        let service_type = self.service_type.unwrap_or_default();
        if customer_name.is_empty() || service_type.is_empty() {
            return Err(ValidationError::MissingRequiredFields.into());
        }
        Ok(NewItem {
            customer_name,
            shoe_type: self.shoe_type,
            service_type,
            status: INITIAL_STATUS.to_string(),
        })
    }
}

/// Partial update of an [`Item`].
///
/// `None` means "leave unchanged"; unset fields are skipped when serialized,
/// so the store only sees the columns being written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ItemChanges {
    /// `true` when no field would be written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.shoe_type.is_none()
            && self.service_type.is_none()
            && self.status.is_none()
    }
}

/// Equality filter for listing items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<String>,
}

impl ItemFilter {
    /// Filter that keeps every item.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on an exact, case-sensitive status match.
    #[must_use]
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}
