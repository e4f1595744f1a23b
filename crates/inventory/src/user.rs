use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryItemId, UserId};

use crate::item::InventoryItem;

/// The user document that exclusively owns its inventory items.
///
/// The whole document is the unit of persistence: every mutation is
/// load-mutate-save, matching the embedded-array layout of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    pub id: UserId,
    pub inventory: Vec<InventoryItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserDocument {
    pub fn new(id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            inventory: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an item to the collection.
    pub fn push_item(&mut self, item: InventoryItem, now: DateTime<Utc>) {
        self.inventory.push(item);
        self.updated_at = now;
    }

    /// Linear scan for an item by identifier.
    pub fn find_item(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    pub fn find_item_mut(&mut self, id: InventoryItemId) -> Option<&mut InventoryItem> {
        self.inventory.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item from the collection, returning it if present.
    pub fn remove_item(&mut self, id: InventoryItemId, now: DateTime<Utc>) -> Option<InventoryItem> {
        let pos = self.inventory.iter().position(|item| item.id == id)?;
        self.updated_at = now;
        Some(self.inventory.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;

    fn test_user() -> UserDocument {
        UserDocument::new(UserId::new(), Utc::now())
    }

    fn test_item(name: &str, stock: i64) -> InventoryItem {
        let new = NewItem::parse(Some(name.to_string()), Some(stock)).unwrap();
        InventoryItem::create(InventoryItemId::new(), new, Utc::now())
    }

    #[test]
    fn pushed_item_is_findable_by_id() {
        let mut user = test_user();
        let item = test_item("Widget", 5);
        let id = item.id;

        user.push_item(item, Utc::now());

        let found = user.find_item(id).unwrap();
        assert_eq!(found.name, "Widget");
        assert_eq!(found.stock, 5);
    }

    #[test]
    fn removing_an_item_makes_it_unfindable() {
        let mut user = test_user();
        let item = test_item("Widget", 5);
        let id = item.id;
        user.push_item(item, Utc::now());

        let removed = user.remove_item(id, Utc::now()).unwrap();
        assert_eq!(removed.id, id);
        assert!(user.find_item(id).is_none());
        assert!(user.inventory.is_empty());
    }

    #[test]
    fn removing_an_absent_item_returns_none_and_leaves_collection_intact() {
        let mut user = test_user();
        user.push_item(test_item("Widget", 5), Utc::now());

        assert!(user.remove_item(InventoryItemId::new(), Utc::now()).is_none());
        assert_eq!(user.inventory.len(), 1);
    }

    #[test]
    fn items_from_other_users_are_not_reachable() {
        let mut owner = test_user();
        let other = test_user();
        let item = test_item("Widget", 5);
        let id = item.id;
        owner.push_item(item, Utc::now());

        assert!(owner.find_item(id).is_some());
        assert!(other.find_item(id).is_none());
    }
}
