//! Session authentication handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use homeport_app::ports::DocumentStore;

use crate::auth::SESSION_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body for `GET /api/auth-status`.
#[derive(Serialize)]
pub struct AuthStatus {
    pub enabled: bool,
    pub authenticated: bool,
}

/// Response body for `GET /api/csrf-token`.
#[derive(Serialize)]
pub struct CsrfToken {
    pub token: String,
}

/// Request body for `POST /api/login`.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

/// `GET /api/auth-status`
pub async fn status<S>(State(state): State<AppState<S>>, jar: CookieJar) -> Json<AuthStatus>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let status = match &state.sessions {
        Some(gate) => AuthStatus {
            enabled: true,
            authenticated: gate.is_authenticated(&jar),
        },
        // With no gate configured the API is open.
        None => AuthStatus {
            enabled: false,
            authenticated: true,
        },
    };
    Json(status)
}

/// `GET /api/csrf-token`
pub async fn csrf_token<S>(State(state): State<AppState<S>>) -> Result<Json<CsrfToken>, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Some(gate) = &state.sessions else {
        return Err(ApiError::Unauthorized);
    };
    Ok(Json(CsrfToken {
        token: gate.issue_csrf_token(),
    }))
}

/// `POST /api/login`
pub async fn login<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthStatus>), ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Some(gate) = &state.sessions else {
        return Err(ApiError::Unauthorized);
    };
    if !gate.take_csrf_token(&req.csrf_token) {
        return Err(ApiError::Forbidden);
    }
    let Some(session) = gate.login(&req.username, &req.password) else {
        tracing::warn!(username = %req.username, "failed login attempt");
        return Err(ApiError::Unauthorized);
    };

    let mut cookie = Cookie::new(SESSION_COOKIE, session);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(AuthStatus {
            enabled: true,
            authenticated: true,
        }),
    ))
}

/// `POST /api/logout`
pub async fn logout<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Some(gate) = &state.sessions else {
        return Err(ApiError::Unauthorized);
    };
    gate.logout(&jar);
    Ok((jar.remove(Cookie::from(SESSION_COOKIE)), StatusCode::NO_CONTENT))
}
