use serde::Serialize;
use utoipa::ToSchema;
use crate::models::Item;

/// Response returned after adding an item
#[derive(Serialize, ToSchema)]
pub struct ItemAddedResponse {
    pub added: Item,
}

/// Response returned after updating an item
#[derive(Serialize, ToSchema)]
pub struct ItemUpdatedResponse {
    pub updated: Item,
}

/// Response returned after deleting an item
#[derive(Serialize, ToSchema)]
pub struct ItemDeletedResponse {
    pub deleted: Item,
}
