use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Response for an error
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.to_string(),
            error: error.into(),
        }
    }
}

/// Failures of item construction and store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(String),

    #[error("Item with item_id={0} does not exist.")]
    NotFound(i64),

    #[error("Item with item_id={0} already exists.")]
    Conflict(i64),

    #[error("No parameters provided for update.")]
    BadRequest,
}

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::Validation(_)
            | InventoryError::Conflict(_)
            | InventoryError::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<InventoryError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: InventoryError) -> Self {
        let status = err.status_code();
        (status, Json(ErrorResponse::new(status, err.to_string())))
    }
}
