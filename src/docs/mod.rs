use utoipa::OpenApi;
use crate::models::*;

/// List items whose id is below `limit`
#[utoipa::path(
    get,
    path = "/",
    params(ItemListQuery),
    responses(
        (status = 200, description = "Items keyed by id", body = ItemListResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_list_doc() {}

/// Add a new item
#[utoipa::path(
    post,
    path = "/",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item added", body = ItemAddedResponse),
        (status = 400, description = "Item id already exists or a field is invalid", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_add_doc() {}

/// Search items by exact field values
#[utoipa::path(
    get,
    path = "/items",
    params(ItemQuery),
    responses(
        (status = 200, description = "Echoed query and matching items", body = ItemSearchResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_search_doc() {}

/// Fetch an item by id
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_get_doc() {}

/// Update the given fields of an item
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id, zero or more"), ItemUpdate),
    responses(
        (status = 200, description = "Item updated", body = ItemUpdatedResponse),
        (status = 400, description = "No arguments specified or an argument is out of range", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_update_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = ItemDeletedResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_delete_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        description = "A barebone inventory app that allows users to check, add, modify and delete items."
    ),
    paths(
        item_list_doc,
        item_add_doc,
        item_search_doc,
        item_get_doc,
        item_update_doc,
        item_delete_doc,
        health_check_doc,
        ready_check_doc,
    ),
    components(
        schemas(
            Category,
            Item,
            ItemPayload,
            ItemQuery,
            ItemUpdate,
            ItemListResponse,
            ItemSearchResponse,
            ItemAddedResponse,
            ItemUpdatedResponse,
            ItemDeletedResponse,
            ErrorResponse,
            HealthResponse,
            ReadyResponse,
        )
    ),
    tags(
        (name = "inventory", description = "Inventory endpoints")
    )
)]
pub struct ApiDoc;
