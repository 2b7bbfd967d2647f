use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Error body format: `{ "error": { "code": "...", "message": "..." } }`.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 403 Forbidden
    Forbidden(String),
    /// 404 Not Found. Also used for ownership failures so callers cannot probe for existence.
    NotFound(String),
    /// 422 Unprocessable Entity
    UnprocessableEntity(String),
    /// 500 with a `CONFIG_ERROR` code; the message is logged, not returned
    Misconfigured(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl AppError {
    /// The error returned for a missing list, or a list owned by someone else.
    #[must_use]
    pub fn list_not_found() -> Self {
        Self::NotFound("List not found or unauthorized".to_string())
    }

    /// The error returned for a missing item, or an item owned by someone else.
    #[must_use]
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found or unauthorized".to_string())
    }

    /// The error returned for a missing category, or another user's category.
    #[must_use]
    pub fn category_not_found() -> Self {
        Self::NotFound("Category not found".to_string())
    }

    #[must_use]
    pub fn admin_required() -> Self {
        Self::Forbidden("Unauthorized: Admin access required".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
            }
            Self::Misconfigured(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The server is not configured for this request".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

/// Allow `?` to automatically convert any `anyhow::Error` into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
