use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use crate::models::{Category, Item};

/// Equality constraints for searching items. Absent fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
    pub category: Option<Category>,
}

/// Response for searching items; the query is echoed back
#[derive(Serialize, ToSchema)]
pub struct ItemSearchResponse {
    pub query: ItemQuery,
    pub selection: Vec<Item>,
}
