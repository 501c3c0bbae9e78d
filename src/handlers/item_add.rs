use crate::{models::{ErrorResponse, Item, ItemAddedResponse, ItemPayload}, store::ItemStore};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// Add a new item. The id is chosen by the caller and must not be taken.
pub async fn item_add(
    State(store): State<Arc<ItemStore>>,
    Json(payload): Json<ItemPayload>,
) -> Result<(StatusCode, Json<ItemAddedResponse>), (StatusCode, Json<ErrorResponse>)> {
    let item_id = payload.id;

    // Validate the payload
    let item = Item::try_from(payload).inspect_err(|e| {
        warn!("Rejected item {}: {}", item_id, e);
    })?;

    let added = store.insert(item).await.inspect_err(|e| {
        warn!("Failed to add item {}: {}", item_id, e);
    })?;
    info!("Item {} added", item_id);

    Ok((StatusCode::OK, Json(ItemAddedResponse { added })))
}
