use axum::Json;
use crate::{db::dbinventory, models::{HealthResponse, ReadyResponse}};
use tracing::{debug, warn};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint.
///
/// Items are served from memory, so the service is ready whether or not the
/// database answers. The response only reports which case applies.
pub async fn ready_check() -> Json<ReadyResponse> {
    debug!("Readiness check requested");
    let database = match dbinventory::get_db() {
        Some(db) => match db.ping().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Database ping failed: {}", e);
                false
            }
        },
        None => false,
    };

    let message = if database {
        "Service is ready".to_string()
    } else {
        "Service is ready, database unavailable".to_string()
    };

    Json(ReadyResponse {
        status: "ok".to_string(),
        message,
        database,
    })
}
