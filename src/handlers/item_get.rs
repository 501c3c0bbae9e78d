use crate::{models::{ErrorResponse, Item}, store::ItemStore};
use axum::{extract::{Path, State}, http::StatusCode, Json};
use std::sync::Arc;
use tracing::warn;

/// Fetch a single item by id
pub async fn item_get(
    State(store): State<Arc<ItemStore>>,
    Path(item_id): Path<i64>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let item = store.get(item_id).await.inspect_err(|e| {
        warn!("Item lookup failed: {}", e);
    })?;

    Ok((StatusCode::OK, Json(item)))
}
