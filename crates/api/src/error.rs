use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobport_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so the conversion to a status code and JSON
/// body happens in exactly one place; handlers only propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `jobport_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource that is not addressed by id (the singleton
    /// content document).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 400 for a path or query value that is not a valid ObjectId.
    pub fn invalid_id(value: &str) -> Self {
        AppError::BadRequest(format!("'{value}' is not a valid object id"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            // The driver has no not-found error to classify: absence is an
            // `Option` at the repository layer. Every driver failure is a
            // real storage problem, logged with detail and sanitized in the
            // response body.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
