//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod auth;
#[allow(clippy::missing_errors_doc)]
pub mod documents;

use axum::Router;
use axum::routing::{get, post};

use homeport_app::ports::DocumentStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// The login/logout/csrf-token routes only exist when authentication is
/// enabled; `auth-status` is always available so frontends can probe.
pub fn routes<S>(auth_enabled: bool) -> Router<AppState<S>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route(
            "/services",
            get(documents::get_document::<S>).post(documents::save_document::<S>),
        )
        .route("/auth-status", get(auth::status::<S>));

    if auth_enabled {
        router = router
            .route("/csrf-token", get(auth::csrf_token::<S>))
            .route("/login", post(auth::login::<S>))
            .route("/logout", post(auth::logout::<S>));
    }

    router
}
