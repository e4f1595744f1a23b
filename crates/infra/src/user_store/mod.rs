//! The Entity Store: whole-document persistence for user documents.

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::UserId;
use stockroom_inventory::UserDocument;

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryUserStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresUserStore;

/// Entity store operation error.
///
/// These are **infrastructure errors** (storage availability, driver
/// failures) as opposed to domain errors (validation, absent resources).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Whole-document user store.
///
/// The unit of persistence is the entire [`UserDocument`], inventory array
/// included. Mutations follow load-mutate-save; concurrent writers to the
/// same user are not serialized (last write wins).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load a user document by id. `Ok(None)` when the user does not exist.
    async fn load(&self, user_id: UserId) -> Result<Option<UserDocument>, StoreError>;

    /// Persist a user document (upsert of the whole document).
    async fn save(&self, user: &UserDocument) -> Result<(), StoreError>;
}
