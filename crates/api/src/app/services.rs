use std::sync::Arc;

use stockroom_infra::{InMemoryUserStore, InventoryService, UserStore};

/// Application services shared across handlers via `Extension`.
pub struct AppServices {
    inventory: InventoryService,
}

impl AppServices {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            inventory: InventoryService::new(store),
        }
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }
}

/// Select the entity store backend from the environment.
///
/// Defaults to the in-memory store; `USE_PERSISTENT_STORE=true` selects
/// Postgres when the `postgres` feature is compiled in.
pub async fn build_services() -> anyhow::Result<AppServices> {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_postgres_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORE=true but postgres feature not enabled, falling back to in-memory"
            );
        }
    }

    tracing::info!("using in-memory user store");
    Ok(AppServices::new(Arc::new(InMemoryUserStore::new())))
}

#[cfg(feature = "postgres")]
async fn build_postgres_services() -> anyhow::Result<AppServices> {
    use stockroom_infra::PostgresUserStore;

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set when USE_PERSISTENT_STORE=true"))?;

    let store = PostgresUserStore::connect(&database_url).await?;
    store.ensure_schema().await?;

    tracing::info!("using postgres user store");
    Ok(AppServices::new(Arc::new(store)))
}
