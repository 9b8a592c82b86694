//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homeport_domain::error::HomeportError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeportError`] and the session-gate outcomes to an HTTP
/// response with the appropriate status code.
pub enum ApiError {
    /// Domain or storage failure.
    Domain(HomeportError),
    /// No live session on a gated endpoint.
    Unauthorized,
    /// Missing, unknown, or already-used anti-forgery token.
    Forbidden,
}

impl From<HomeportError> for ApiError {
    fn from(err: HomeportError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(HomeportError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(HomeportError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(HomeportError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "authentication required".to_string(),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "invalid anti-forgery token".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
