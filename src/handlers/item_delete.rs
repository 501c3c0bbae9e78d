use crate::{models::{ErrorResponse, ItemDeletedResponse}, store::ItemStore};
use axum::{extract::{Path, State}, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// Delete an item and return what was removed
pub async fn item_delete(
    State(store): State<Arc<ItemStore>>,
    Path(item_id): Path<i64>,
) -> Result<(StatusCode, Json<ItemDeletedResponse>), (StatusCode, Json<ErrorResponse>)> {
    let deleted = store.delete(item_id).await.inspect_err(|e| {
        warn!("Failed to delete item {}: {}", item_id, e);
    })?;
    info!("Item {} deleted", item_id);

    Ok((StatusCode::OK, Json(ItemDeletedResponse { deleted })))
}
