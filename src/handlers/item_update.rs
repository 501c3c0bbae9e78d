use crate::{models::{ErrorResponse, InventoryError, ItemUpdate, ItemUpdatedResponse}, store::ItemStore};
use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// Update the supplied fields of an existing item
pub async fn item_update(
    State(store): State<Arc<ItemStore>>,
    Path(item_id): Path<i64>,
    Query(update): Query<ItemUpdate>,
) -> Result<(StatusCode, Json<ItemUpdatedResponse>), (StatusCode, Json<ErrorResponse>)> {
    if item_id < 0 {
        let err = InventoryError::Validation("item_id must be greater than or equal to 0.".to_string());
        warn!("Rejected update of item {}: {}", item_id, err);
        return Err(err.into());
    }

    // Check parameter bounds before the lookup
    update.validate().inspect_err(|e| {
        warn!("Rejected update of item {}: {}", item_id, e);
    })?;

    let updated = store.update(item_id, update).await.inspect_err(|e| {
        warn!("Failed to update item {}: {}", item_id, e);
    })?;
    info!("Item {} updated", item_id);

    Ok((StatusCode::OK, Json(ItemUpdatedResponse { updated })))
}
