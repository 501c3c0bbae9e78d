use crate::{models::{ItemQuery, ItemSearchResponse}, store::ItemStore};
use axum::{extract::{Query, State}, http::StatusCode, Json};
use std::sync::Arc;
use tracing::debug;

/// Search items by exact field values
pub async fn item_search(
    State(store): State<Arc<ItemStore>>,
    Query(query): Query<ItemQuery>,
) -> (StatusCode, Json<ItemSearchResponse>) {
    let selection = store.search(&query).await;
    if query.is_wildcard() {
        debug!("Search without constraints matched {} items", selection.len());
    } else {
        debug!("Search {:?} matched {} items", query, selection.len());
    }

    (StatusCode::OK, Json(ItemSearchResponse { query, selection }))
}
