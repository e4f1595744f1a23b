//! Service layer: orchestrates entity-store operations for one principal.
//!
//! Stateless per-call. Every operation first loads the principal's user
//! document; a missing user or missing item maps to `NotFound` with a
//! resource-specific message. Store failures propagate unmodified.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::instrument;

use stockroom_core::{DomainError, InventoryItemId, UserId};
use stockroom_inventory::{InventoryItem, ItemPatch, NewItem};

use crate::user_store::{StoreError, UserStore};

/// Service-level error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// User or inventory item absent; the message names the resource.
    #[error("{0}")]
    NotFound(&'static str),

    /// Deterministic domain failure (validation, bad identifier).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Infrastructure failure, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Inventory operations against a single user's embedded collection.
pub struct InventoryService {
    store: Arc<dyn UserStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    async fn load_user(&self, principal: UserId) -> Result<stockroom_inventory::UserDocument, ServiceError> {
        self.store
            .load(principal)
            .await?
            .ok_or(ServiceError::NotFound("User not found"))
    }

    /// Append a new item to the principal's inventory and persist the user.
    #[instrument(skip(self, new), fields(user_id = %principal))]
    pub async fn create(&self, principal: UserId, new: NewItem) -> Result<InventoryItem, ServiceError> {
        let mut user = self.load_user(principal).await?;

        let now = Utc::now();
        let item = InventoryItem::create(InventoryItemId::new(), new, now);
        user.push_item(item.clone(), now);

        self.store.save(&user).await?;
        Ok(item)
    }

    /// Return the principal's full inventory collection.
    #[instrument(skip(self), fields(user_id = %principal))]
    pub async fn list(&self, principal: UserId) -> Result<Vec<InventoryItem>, ServiceError> {
        Ok(self.load_user(principal).await?.inventory)
    }

    /// Look up one item by id (linear scan of the embedded array).
    #[instrument(skip(self), fields(user_id = %principal, item_id = %id))]
    pub async fn get(&self, principal: UserId, id: InventoryItemId) -> Result<InventoryItem, ServiceError> {
        let user = self.load_user(principal).await?;
        user.find_item(id)
            .cloned()
            .ok_or(ServiceError::NotFound("Inventory not found"))
    }

    /// Shallow-merge a patch onto an existing item and persist the user.
    #[instrument(skip(self, patch), fields(user_id = %principal, item_id = %id))]
    pub async fn update(
        &self,
        principal: UserId,
        id: InventoryItemId,
        patch: ItemPatch,
    ) -> Result<InventoryItem, ServiceError> {
        let mut user = self.load_user(principal).await?;

        let now = Utc::now();
        let item = user
            .find_item_mut(id)
            .ok_or(ServiceError::NotFound("Inventory not found"))?;
        item.apply_patch(&patch, now);
        let updated = item.clone();
        user.updated_at = now;

        self.store.save(&user).await?;
        Ok(updated)
    }

    /// Remove an item from the collection and persist the user.
    #[instrument(skip(self), fields(user_id = %principal, item_id = %id))]
    pub async fn delete(&self, principal: UserId, id: InventoryItemId) -> Result<InventoryItem, ServiceError> {
        let mut user = self.load_user(principal).await?;

        let removed = user
            .remove_item(id, Utc::now())
            .ok_or(ServiceError::NotFound("Inventory not found"))?;

        self.store.save(&user).await?;
        Ok(removed)
    }
}
