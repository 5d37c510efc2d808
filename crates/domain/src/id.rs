//! Store-assigned item identifier.
//!
//! The store owns key generation, so the id is opaque here. Tables keyed by
//! an identity column hand out integers, tables keyed by `uuid` hand out
//! strings; [`ItemId`] keeps whichever JSON kind it was read in so responses
//! echo the store's representation unchanged.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Integer(i64),
    Text(String),
}

/// Unique identifier for an [`Item`](crate::item::Item).
///
/// Equality follows the textual form, the same way the store compares an
/// `id=eq.<text>` filter: `7` and `"7"` are equal, `7` and `"007"` are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Repr);

impl ItemId {
    /// Wrap an integer key.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self(Repr::Integer(value))
    }

    /// Wrap a textual key (uuid or any other string).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when `value` is empty.
    pub fn from_text(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(Repr::Text(value)))
    }

    fn as_text(&self) -> Cow<'_, str> {
        match &self.0 {
            Repr::Integer(value) => Cow::Owned(value.to_string()),
            Repr::Text(value) => Cow::Borrowed(value),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        self.as_text() == other.as_text()
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_text().hash(state);
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Integer(value) => value.fmt(f),
            Repr::Text(value) => value.fmt(f),
        }
    }
}

/// Parsing keeps the text exactly as given; `007` stays `007`.
impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
