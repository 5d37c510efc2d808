//! # shoewashd: shoewash daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars, `.env`)
//! - Initialise logging
//! - Construct the store handle and the repository implementation (adapter)
//! - Construct the application service, injecting the repository via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;
mod logging;

use shoewash_adapter_http_axum::router;
use shoewash_adapter_http_axum::state::AppState;
use shoewash_adapter_storage_postgrest::PostgrestItemRepository;
use shoewash_app::services::item_service::ItemService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config.logging.filter)?;

    if !config.store.is_complete() {
        tracing::warn!("SUPABASE_URL or SUPABASE_KEY is not set; store calls will fail");
    }

    // Store
    let client = config.store.clone().build()?;
    let item_repo = PostgrestItemRepository::new(client);

    // Services
    let item_service = ItemService::new(item_repo);

    // HTTP
    let app = router::build(AppState::new(item_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, table = %config.store.table, "shoewashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shoewashd stopped");
    Ok(())
}

/// Resolve when SIGINT or (on unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
