//! PostgREST implementation of [`ItemRepository`].

use reqwest::Method;

use shoewash_app::ports::ItemRepository;
use shoewash_domain::error::ShoeWashError;
use shoewash_domain::id::ItemId;
use shoewash_domain::item::{Item, ItemChanges, ItemFilter, NewItem};

use crate::client::{PostgrestClient, eq};
use crate::error::StoreError;

const SELECT_ALL: (&str, &str) = ("select", "*");
const NEWEST_FIRST: (&str, &str) = ("order", "created_at.desc");

/// PostgREST-backed item repository.
pub struct PostgrestItemRepository {
    client: PostgrestClient,
}

impl PostgrestItemRepository {
    /// Create a new repository using the given store handle.
    #[must_use]
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }

    async fn first_by_id(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        let filter = eq(&id.to_string());
        let request = self
            .client
            .request(Method::GET, &[SELECT_ALL, ("id", filter.as_str())])?;
        let rows: Vec<Item> = self.client.fetch_rows(request).await?;
        Ok(rows.into_iter().next())
    }
}

impl ItemRepository for PostgrestItemRepository {
    async fn create(&self, item: NewItem) -> Result<Item, ShoeWashError> {
        let request = self.client.returning(Method::POST, &[])?.json(&[item]);
        let rows: Vec<Item> = self.client.fetch_rows(request).await?;
        let created = rows.into_iter().next().ok_or(StoreError::EmptyResponse)?;
        tracing::info!(id = %created.id, "item created");
        Ok(created)
    }

    async fn list(&self, filter: ItemFilter) -> Result<Vec<Item>, ShoeWashError> {
        let status = filter.status.as_deref().map(eq);
        let mut query = vec![SELECT_ALL, NEWEST_FIRST];
        if let Some(status) = &status {
            query.push(("status", status.as_str()));
        }
        let request = self.client.request(Method::GET, &query)?;
        Ok(self.client.fetch_rows(request).await?)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, ShoeWashError> {
        Ok(self.first_by_id(&id).await?)
    }

    async fn update(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> Result<Option<Item>, ShoeWashError> {
        // PostgREST rejects an empty PATCH body; nothing to write means a plain read.
        if changes.is_empty() {
            return Ok(self.first_by_id(&id).await?);
        }
        let filter = eq(&id.to_string());
        let request = self
            .client
            .returning(Method::PATCH, &[("id", filter.as_str())])?
            .json(&changes);
        let rows: Vec<Item> = self.client.fetch_rows(request).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: ItemId) -> Result<(), ShoeWashError> {
        let filter = eq(&id.to_string());
        let request = self
            .client
            .request(Method::DELETE, &[("id", filter.as_str())])?;
        self.client.send(request).await?;
        tracing::info!(%id, "item deleted");
        Ok(())
    }
}
