//! `stockroom-infra` — entity store implementations and service orchestration.

pub mod service;
pub mod user_store;

pub use service::{InventoryService, ServiceError};
#[cfg(feature = "postgres")]
pub use user_store::PostgresUserStore;
pub use user_store::{InMemoryUserStore, StoreError, UserStore};
