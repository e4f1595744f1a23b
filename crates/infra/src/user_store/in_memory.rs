use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_core::UserId;
use stockroom_inventory::UserDocument;

use super::{StoreError, UserStore};

/// In-memory user store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, UserDocument>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self, user_id: UserId) -> Result<Option<UserDocument>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(users.get(&user_id).cloned())
    }

    async fn save(&self, user: &UserDocument) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        users.insert(user.id, user.clone());
        Ok(())
    }
}
