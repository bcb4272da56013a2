//! Item repository: one domain intent, one HTTP call.
//!
//! Nothing here retries, batches, caches, or catches. Errors from the API
//! client propagate unchanged.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{Item, ItemId, ItemInput};

#[derive(Clone)]
pub struct ItemRepository {
    api: ApiClient,
}

impl ItemRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        tracing::debug!("listing items");
        let response = self.api.send(self.api.items().build_list_items()).await?;
        self.api.items().parse_list_items(response)
    }

    pub async fn get(&self, id: &ItemId) -> Result<Item, ApiError> {
        tracing::debug!(%id, "fetching item");
        let response = self.api.send(self.api.items().build_get_item(id)).await?;
        self.api.items().parse_get_item(response)
    }

    pub async fn create(&self, input: &ItemInput) -> Result<Item, ApiError> {
        tracing::debug!(name = %input.name, "creating item");
        let request = self.api.items().build_create_item(input)?;
        let response = self.api.send(request).await?;
        self.api.items().parse_create_item(response)
    }

    pub async fn update(&self, id: &ItemId, input: &ItemInput) -> Result<Item, ApiError> {
        tracing::debug!(%id, "updating item");
        let request = self.api.items().build_update_item(id, input)?;
        let response = self.api.send(request).await?;
        self.api.items().parse_update_item(response)
    }

    /// Resolves to `true` only for a 200 or 204 answer.
    pub async fn delete(&self, id: &ItemId) -> Result<bool, ApiError> {
        tracing::debug!(%id, "deleting item");
        let response = self.api.send(self.api.items().build_delete_item(id)).await?;
        self.api.items().parse_delete_item(response)
    }
}
