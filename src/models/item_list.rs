use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use crate::models::Item;

/// Key ceiling used by `GET /` when no `limit` is given
pub const DEFAULT_LIST_LIMIT: i64 = 2;

/// Query parameters for listing items
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Only items whose id is below this value are returned
    pub limit: Option<i64>,
}

impl ItemListQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// Response for listing items, keyed by item id
#[derive(Serialize, ToSchema)]
pub struct ItemListResponse {
    pub items: BTreeMap<i64, Item>,
}
