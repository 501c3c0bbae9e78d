mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod db;
mod store;

use config::Config;
use models::ItemQuery;
use routes::create_app;
use std::panic;
use std::sync::Arc;
use store::ItemStore;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration first so LOG_LEVEL can shape the default filter
    let loaded = Config::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to the configured level, but allow debug for our app
            format!("inventory_api=debug,tower_http=debug,axum::rejection=trace,{}", log_level).into()
        }))
        .init();

    info!("Starting server...");

    let config = match loaded {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            warn!("Using default configuration");
            Config::default()
        }
    };
    info!("{} running in {} mode", config.service_name, config.environment);

    // Seed the in-memory store that serves every request
    let store = ItemStore::seeded().unwrap_or_else(|e| {
        error!("Failed to seed item store: {}", e);
        ItemStore::new()
    });
    if store.is_empty().await {
        warn!("Starting with an empty item store");
    } else {
        info!("Serving {} items from memory", store.len().await);
    }

    // Database bootstrap runs once and never blocks serving from memory
    if let Some(db_url) = config.database_url() {
        match db::dbinventory::init_db(&db_url).await {
            Ok(db) => {
                let sample = if config.db_seed {
                    Some(store.search(&ItemQuery::default()).await)
                } else {
                    None
                };
                match db::dbinventory::bootstrap(&db, sample.as_deref()).await {
                    Ok(_) => info!("Database initialized successfully"),
                    Err(e) => error!("Database bootstrap failed: {}", e),
                }
            }
            Err(e) => {
                error!("Failed to initialize database: {}", e);
                warn!("Continuing with in-memory items only");
            }
        }
    } else {
        warn!("No database configured - serving from in-memory items only");
    }

    let app_routes = create_app(&config, Arc::new(store));

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/docs", config.server_address());

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
