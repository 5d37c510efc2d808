//! Item service: use-cases for managing cleaning jobs.

use shoewash_domain::error::{NotFoundError, ShoeWashError};
use shoewash_domain::id::ItemId;
use shoewash_domain::item::{Item, ItemChanges, ItemFilter, NewItem};

use crate::ports::ItemRepository;

const ENTITY: &str = "Item";

fn not_found(id: &ItemId) -> ShoeWashError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for item CRUD operations.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new item.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, item), fields(customer_name = %item.customer_name()))]
    pub async fn create_item(&self, item: NewItem) -> Result<Item, ShoeWashError> {
        self.repo.create(item).await
    }

    /// List items matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> Result<Vec<Item>, ShoeWashError> {
        self.repo.list(filter).await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeWashError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, ShoeWashError> {
        let missing = not_found(&id);
        self.repo.get_by_id(id).await?.ok_or(missing)
    }

    /// Apply a partial update to an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeWashError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_item(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> Result<Item, ShoeWashError> {
        let missing = not_found(&id);
        self.repo.update(id, changes).await?.ok_or(missing)
    }

    /// Delete an item by id. Deleting a missing item is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), ShoeWashError> {
        self.repo.delete(id).await
    }
}
