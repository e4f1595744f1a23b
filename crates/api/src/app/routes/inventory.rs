use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockroom_core::InventoryItemId;
use stockroom_inventory::{ItemPatch, NewItem};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/inventories", get(list_inventories).post(create_inventory))
        .route(
            "/inventories/:inventory_id",
            get(get_inventory)
                .patch(update_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
}

pub async fn create_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateInventoryRequest>,
) -> axum::response::Response {
    let new = match NewItem::parse(body.name, body.stock) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e.into()),
    };

    match services.inventory().create(principal.user_id(), new).await {
        Ok(item) => (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn list_inventories(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<dto::ListInventoriesQuery>,
) -> axum::response::Response {
    if query.has_filters() {
        // The contract accepts these parameters; the service does not apply them.
        tracing::debug!(?query, "list filters accepted but not applied");
    }

    match services.inventory().list(principal.user_id()).await {
        Ok(items) => {
            let body: Vec<serde_json::Value> = items.iter().map(dto::item_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::error_response(e),
    }
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(inventory_id): Path<String>,
) -> axum::response::Response {
    let id: InventoryItemId = match inventory_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e.into()),
    };

    match services.inventory().get(principal.user_id(), id).await {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn update_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(inventory_id): Path<String>,
    Json(body): Json<dto::UpdateInventoryRequest>,
) -> axum::response::Response {
    let id: InventoryItemId = match inventory_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e.into()),
    };

    let patch = match ItemPatch::parse(body.name, body.stock) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e.into()),
    };

    match services.inventory().update(principal.user_id(), id, patch).await {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn delete_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(inventory_id): Path<String>,
) -> axum::response::Response {
    let id: InventoryItemId = match inventory_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e.into()),
    };

    match services.inventory().delete(principal.user_id(), id).await {
        Ok(_removed) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::error_response(e),
    }
}
