//! Postgres-backed user store.
//!
//! One row per user; the inventory array is stored as a JSONB column, so
//! load/save keep the whole-document read-modify-write semantics of the
//! in-memory store. Concurrent writers to the same row are not serialized
//! beyond row-level atomicity (last write wins).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use stockroom_core::UserId;
use stockroom_inventory::{InventoryItem, UserDocument};

use super::{StoreError, UserStore};

/// Postgres-backed user store.
///
/// Expects the following schema (see [`PostgresUserStore::ensure_schema`]):
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS users (
///     id         UUID PRIMARY KEY,
///     inventory  JSONB NOT NULL DEFAULT '[]'::jsonb,
///     created_at TIMESTAMPTZ NOT NULL,
///     updated_at TIMESTAMPTZ NOT NULL
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and wrap the pool.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Create the users table if it does not exist yet (dev convenience).
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id         UUID PRIMARY KEY,
                inventory  JSONB NOT NULL DEFAULT '[]'::jsonb,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Backend(other.to_string()),
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn load(&self, user_id: UserId) -> Result<Option<UserDocument>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, inventory, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: Uuid = row.try_get("id").map_err(map_sqlx_error)?;
        let inventory: serde_json::Value = row.try_get("inventory").map_err(map_sqlx_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_sqlx_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_sqlx_error)?;

        let inventory: Vec<InventoryItem> = serde_json::from_value(inventory)
            .map_err(|e| StoreError::Backend(format!("inventory column deserialization failed: {e}")))?;

        Ok(Some(UserDocument {
            id: UserId::from_uuid(id),
            inventory,
            created_at,
            updated_at,
        }))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn save(&self, user: &UserDocument) -> Result<(), StoreError> {
        let inventory = serde_json::to_value(&user.inventory)
            .map_err(|e| StoreError::Backend(format!("inventory column serialization failed: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, inventory, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET inventory = EXCLUDED.inventory,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(inventory)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
