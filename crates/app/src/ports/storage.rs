//! Storage port: repository trait for item persistence.

use std::future::Future;

use shoewash_domain::error::ShoeWashError;
use shoewash_domain::id::ItemId;
use shoewash_domain::item::{Item, ItemChanges, ItemFilter, NewItem};

/// Repository for persisting and querying [`Item`]s.
///
/// Each method maps to exactly one call against the backing store.
pub trait ItemRepository {
    /// Insert a new item and return the stored row, including the
    /// store-assigned `id` and `created_at`.
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ShoeWashError>> + Send;

    /// List items matching `filter`, newest `created_at` first.
    fn list(
        &self,
        filter: ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, ShoeWashError>> + Send;

    /// Get an item by its identifier.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, ShoeWashError>> + Send;

    /// Apply `changes` to the item with `id` and return the updated row, or
    /// `None` when no row matched. Never creates a row.
    fn update(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> impl Future<Output = Result<Option<Item>, ShoeWashError>> + Send;

    /// Delete the item with `id`. Succeeds whether or not a row matched.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), ShoeWashError>> + Send;
}

impl<T: ItemRepository + Send + Sync> ItemRepository for std::sync::Arc<T> {
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ShoeWashError>> + Send {
        (**self).create(item)
    }

    fn list(
        &self,
        filter: ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, ShoeWashError>> + Send {
        (**self).list(filter)
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, ShoeWashError>> + Send {
        (**self).get_by_id(id)
    }

    fn update(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> impl Future<Output = Result<Option<Item>, ShoeWashError>> + Send {
        (**self).update(id, changes)
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), ShoeWashError>> + Send {
        (**self).delete(id)
    }
}
