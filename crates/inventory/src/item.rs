use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, InventoryItemId};

/// An inventory item owned by exactly one user.
///
/// Items live embedded in the owning user's document; there is no standalone
/// collection and no global inventory namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Materialize a validated [`NewItem`] under a store-assigned identifier.
    pub fn create(id: InventoryItemId, new: NewItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge a patch onto this item. Absent fields stay unchanged.
    pub fn apply_patch(&mut self, patch: &ItemPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        self.updated_at = now;
    }
}

/// Validated create input: both fields required, name stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    stock: i64,
}

impl NewItem {
    /// Validate raw create input before it reaches the service layer.
    pub fn parse(name: Option<String>, stock: Option<i64>) -> DomainResult<Self> {
        let name = name.ok_or_else(|| DomainError::validation("name is required"))?;
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let stock = stock.ok_or_else(|| DomainError::validation("stock is required"))?;

        Ok(Self { name, stock })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }
}

/// Validated partial update. Neither field is required; an empty patch is a
/// persisted no-op (the contract does not enforce at-least-one-present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    name: Option<String>,
    stock: Option<i64>,
}

impl ItemPatch {
    /// Validate raw update input. A present name must be non-empty after trim.
    pub fn parse(name: Option<String>, stock: Option<i64>) -> DomainResult<Self> {
        let name = match name {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(DomainError::validation("name cannot be empty"));
                }
                Some(trimmed)
            }
            None => None,
        };

        Ok(Self { name, stock })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item_id() -> InventoryItemId {
        InventoryItemId::new()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn parse_new_item_requires_both_fields() {
        let err = NewItem::parse(None, Some(5)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = NewItem::parse(Some("Widget".to_string()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn parse_new_item_trims_and_rejects_blank_name() {
        let new = NewItem::parse(Some("  Widget  ".to_string()), Some(5)).unwrap();
        assert_eq!(new.name(), "Widget");

        let err = NewItem::parse(Some("   ".to_string()), Some(5)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn patch_with_blank_name_is_rejected() {
        let err = ItemPatch::parse(Some("  ".to_string()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_patch_is_accepted_and_only_bumps_updated_at() {
        let new = NewItem::parse(Some("Widget".to_string()), Some(5)).unwrap();
        let created = test_time();
        let mut item = InventoryItem::create(test_item_id(), new, created);

        let patch = ItemPatch::parse(None, None).unwrap();
        assert!(patch.is_empty());

        let later = created + chrono::Duration::seconds(1);
        item.apply_patch(&patch, later);

        assert_eq!(item.name, "Widget");
        assert_eq!(item.stock, 5);
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let new = NewItem::parse(Some("Widget".to_string()), Some(5)).unwrap();
        let mut item = InventoryItem::create(test_item_id(), new, test_time());

        let patch = ItemPatch::parse(None, Some(3)).unwrap();
        item.apply_patch(&patch, test_time());

        assert_eq!(item.name, "Widget");
        assert_eq!(item.stock, 3);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: updating a subset of fields leaves the unspecified
            /// fields unchanged.
            #[test]
            fn partial_update_leaves_unspecified_fields_unchanged(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                stock in any::<i64>(),
                new_name in proptest::option::of("[A-Za-z][A-Za-z0-9 ]{0,40}"),
                new_stock in proptest::option::of(any::<i64>()),
            ) {
                let new = NewItem::parse(Some(name.clone()), Some(stock)).unwrap();
                let mut item = InventoryItem::create(test_item_id(), new, test_time());
                let before = item.clone();

                let patch = ItemPatch::parse(new_name.clone(), new_stock).unwrap();
                item.apply_patch(&patch, test_time());

                match new_name {
                    Some(n) => prop_assert_eq!(item.name.as_str(), n.trim()),
                    None => prop_assert_eq!(&item.name, &before.name),
                }
                match new_stock {
                    Some(s) => prop_assert_eq!(item.stock, s),
                    None => prop_assert_eq!(item.stock, before.stock),
                }
                prop_assert_eq!(item.id, before.id);
                prop_assert_eq!(item.created_at, before.created_at);
            }
        }
    }
}
