use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::FormRejection;
use fsnd_core::error::CoreError;
use fsnd_db::failure::{classify_sqlx_error, PersistenceFailure};

use crate::templates::{self, Page};
use crate::views::{Empty, ErrorPage};

/// Application-level error type for HTML handlers.
///
/// Renders the 404 page for missing resources and the generic error page
/// (with the status code) for everything else.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fsnd_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] liquid::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    StatusCode::NOT_FOUND
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(error = %msg, "Validation failed");
                    StatusCode::BAD_REQUEST
                }
                CoreError::Conflict(msg) => {
                    tracing::warn!(error = %msg, "Conflict");
                    StatusCode::CONFLICT
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Database(err) => match classify_sqlx_error(err) {
                PersistenceFailure::NotFound => StatusCode::NOT_FOUND,
                PersistenceFailure::Conflict(msg) => {
                    tracing::warn!(error = %msg, "Write rejected by constraint");
                    StatusCode::CONFLICT
                }
                PersistenceFailure::Internal => {
                    tracing::error!(error = %err, "Database error");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Bad request");
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(msg) => {
                tracing::debug!(error = %msg, "Not found");
                StatusCode::NOT_FOUND
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let rendered = if status == StatusCode::NOT_FOUND {
            templates::render(Page::NotFound, &Empty::default())
        } else {
            templates::render(
                Page::Error,
                &ErrorPage {
                    status: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("Something went wrong")
                        .to_string(),
                },
            )
        };

        match rendered {
            Ok(html) => (status, html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Error page failed to render");
                (status, Html(status.to_string())).into_response()
            }
        }
    }
}
