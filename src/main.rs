mod app;
mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod repository;
mod service;

use tracing_subscriber::EnvFilter;

use std::sync::Arc;

use config::StorageConfig;
use repository::{MemoryRepository, PgRepository, Storage};
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded notes API config");

    // Storage creation and migration
    let storage = match &cfg.storage {
        StorageConfig::Postgres { dsn } => {
            let mut repo = PgRepository::new(dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            repo.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Storage::Postgres(repo)
        }
        StorageConfig::Memory => Storage::Memory(MemoryRepository::new()),
    };
    tracing::info!("Using {} note storage", storage.backend_name());

    // Service creation
    let service = Arc::new(NoteService::new(storage, cfg.public_base_url.clone()));
    if let Some(base) = &cfg.public_base_url {
        tracing::info!("Share links enabled under {base}/share");
    }

    let router = app::router(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Notes API starting, listening on {}", addr);
    }

    axum::serve(listener, router).await.unwrap_or_else(|e| {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    });
}
