use crate::{handlers::*, store::ItemStore};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(store: Arc<ItemStore>) -> Router {
    Router::<Arc<ItemStore>>::new()
        .route("/", get(item_list).post(item_add))
        .route("/items", get(item_search))
        .route("/items/:item_id", get(item_get).put(item_update).delete(item_delete))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(store)
}
