//! JSON handlers for the dashboard document.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use homeport_app::ports::DocumentStore;
use homeport_domain::document::Document;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful save.
#[derive(Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// Reject the request when auth is enabled and the jar has no live session.
fn authorize<S>(state: &AppState<S>, jar: &CookieJar) -> Result<(), ApiError> {
    match &state.sessions {
        Some(gate) if !gate.is_authenticated(jar) => Err(ApiError::Unauthorized),
        _ => Ok(()),
    }
}

/// `GET /api/services`
///
/// Re-reads the persisted document so writes made by other processes since
/// the last request are visible.
pub async fn get_document<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
) -> Result<Json<Document>, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    authorize(&state, &jar)?;
    let document = state.catalog.reload().await?;
    Ok(Json(document))
}

/// `POST /api/services`
///
/// Replaces the persisted document wholesale with the submitted one.
pub async fn save_document<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
    Json(document): Json<Document>,
) -> Result<Json<SaveResponse>, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    authorize(&state, &jar)?;
    state.catalog.replace_document(document).await?;
    Ok(Json(SaveResponse { success: true }))
}
