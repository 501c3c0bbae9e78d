use crate::{models::{ItemListQuery, ItemListResponse}, store::ItemStore};
use axum::{extract::{Query, State}, http::StatusCode, Json};
use std::sync::Arc;
use tracing::debug;

/// List items whose id is below `limit`
pub async fn item_list(
    State(store): State<Arc<ItemStore>>,
    Query(query): Query<ItemListQuery>,
) -> (StatusCode, Json<ItemListResponse>) {
    let limit = query.limit();
    let items = store.list(limit).await;
    debug!("Listing {} items below id {}", items.len(), limit);

    (StatusCode::OK, Json(ItemListResponse { items }))
}
