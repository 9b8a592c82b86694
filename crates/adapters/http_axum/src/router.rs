//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use homeport_app::ports::DocumentStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and, when an assets directory is given,
/// serves the static dashboard frontend from it as the fallback. Includes
/// a [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level and a permissive [`CorsLayer`] (LAN-local, single-user
/// deployment).
pub fn build<S>(state: AppState<S>, assets_dir: Option<PathBuf>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    let auth_enabled = state.sessions.is_some();
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes(auth_enabled));

    if let Some(dir) = assets_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
