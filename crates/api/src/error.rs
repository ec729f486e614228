use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use revassign_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// This is the only place a domain error becomes a status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `revassign_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed or incomplete request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// HTTP status for a domain error.
///
/// `PR_MERGED` is a state conflict on an existing PR, so it is 409 rather than 404.
pub fn status_for(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound { .. } | CoreError::NotAssigned { .. } | CoreError::NoCandidate(_) => {
            StatusCode::NOT_FOUND
        }
        CoreError::TeamExists(_) => StatusCode::BAD_REQUEST,
        CoreError::PrExists(_) | CoreError::PrMerged(_) => StatusCode::CONFLICT,
        CoreError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Unknown(msg)) => {
                tracing::error!(error = %msg, "Store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Core(core) => (status_for(core), core.code(), core.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "msg": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
