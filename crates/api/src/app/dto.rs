use serde::Deserialize;

use stockroom_inventory::InventoryItem;

// -------------------------
// Request DTOs
// -------------------------

/// Create body. Fields are optional at the wire level so validation can
/// report missing fields as 400s instead of body-rejection responses.
#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub name: Option<String>,
    pub stock: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub name: Option<String>,
    pub stock: Option<i64>,
}

/// List query contract. All fields optional and loosely typed; accepted but
/// not applied by the service (the collection is returned whole).
#[derive(Debug, Deserialize)]
pub struct ListInventoriesQuery {
    pub name: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl ListInventoriesQuery {
    pub fn has_filters(&self) -> bool {
        self.name.is_some() || self.sort_by.is_some() || self.limit.is_some() || self.page.is_some()
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.to_string(),
        "name": item.name,
        "stock": item.stock,
        "created_at": item.created_at.to_rfc3339(),
        "updated_at": item.updated_at.to_rfc3339(),
    })
}
