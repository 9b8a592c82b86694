//! # homeportd — homeport daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialise the tracing subscriber
//! - Construct the JSON document store (adapter)
//! - Load the catalog service, injecting the store via its port trait
//! - Build the axum router, injecting the application state
//! - Bind to a TCP port and serve; shut down gracefully on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homeport_adapter_http_axum::auth::SessionGate;
use homeport_adapter_http_axum::router;
use homeport_adapter_http_axum::state::AppState;
use homeport_adapter_storage_json::JsonDocumentStore;
use homeport_app::services::catalog_service::CatalogService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let store = JsonDocumentStore::new(config.storage.path.clone());
    tracing::info!(path = %config.storage.path.display(), "using document file");

    // Catalog
    let catalog = CatalogService::load(store).await?;

    // Sessions
    let sessions = config.auth.credentials().map(SessionGate::new);
    if sessions.is_some() {
        tracing::info!("session authentication enabled");
    }

    // HTTP
    let state = AppState::new(catalog, sessions);
    let app = router::build(state, Some(config.assets.dir.clone()));

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "homeportd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
