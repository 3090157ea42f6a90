use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fsnd_core::error::CoreError;
use fsnd_db::failure::{classify_sqlx_error, PersistenceFailure};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": <status>, "message": <text> }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fsnd_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx while reading.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error while inserting or deleting. Always a 422.
    #[error("Unprocessable: {0}")]
    Unprocessable(#[source] sqlx::Error),

    /// Malformed or incomplete request input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path whose parameters do not identify any resource.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

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

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

const BAD_REQUEST: &str = "bad request";
const NOT_FOUND: &str = "resource not found";
const UNPROCESSABLE: &str = "unprocessable";
const SERVER_ERROR: &str = "server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, NOT_FOUND.into())
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(error = %msg, "Validation failed");
                    (StatusCode::BAD_REQUEST, BAD_REQUEST.into())
                }
                CoreError::Conflict(msg) => {
                    tracing::warn!(error = %msg, "Conflict");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        format!("{UNPROCESSABLE}: conflict"),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.into())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => match classify_sqlx_error(err) {
                PersistenceFailure::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND.into()),
                _ => {
                    tracing::error!(error = %err, "Database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.into())
                }
            },
            AppError::Unprocessable(err) => {
                let failure = classify_sqlx_error(err);
                tracing::warn!(error = %err, cause = failure.label(), "Mutation failed");
                let message = match failure {
                    PersistenceFailure::Conflict(_) => format!("{UNPROCESSABLE}: conflict"),
                    _ => UNPROCESSABLE.into(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, BAD_REQUEST.into())
            }
            AppError::NotFound(msg) => {
                tracing::debug!(error = %msg, "Not found");
                (StatusCode::NOT_FOUND, NOT_FOUND.into())
            }
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".into())
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
