//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shoewash_app::ports::ItemRepository;

use crate::state::AppState;

/// Plain-text banner served at `/`.
pub const LIVENESS_MESSAGE: &str = "Shoe cleaning service API is running!";

/// Build the top-level axum [`Router`].
///
/// Merges the items API with the liveness routes. Includes a permissive
/// [`CorsLayer`] and a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health_check() -> &'static str {
    "OK"
}
