//! Typed classification of sqlx errors.
//!
//! Web crates turn a failed query into one of these outcomes before
//! choosing a status code or a flash message, so raw driver errors never
//! reach the client.

use fsnd_core::error::CoreError;

/// PostgreSQL `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Outcome of a failed database operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceFailure {
    #[error("row not found")]
    NotFound,
    /// Unique or foreign-key constraint violation.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal database error")]
    Internal,
}

impl PersistenceFailure {
    /// Short label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::Conflict(_) => "conflict",
            Self::Internal => "internal",
        }
    }
}

/// Classify a sqlx error.
///
/// - `RowNotFound` maps to [`PersistenceFailure::NotFound`].
/// - `23505` / `23503` map to [`PersistenceFailure::Conflict`] naming the constraint.
/// - Everything else maps to [`PersistenceFailure::Internal`].
pub fn classify_sqlx_error(err: &sqlx::Error) -> PersistenceFailure {
    match err {
        sqlx::Error::RowNotFound => PersistenceFailure::NotFound,
        sqlx::Error::Database(db_err)
            if matches!(
                db_err.code().as_deref(),
                Some(UNIQUE_VIOLATION) | Some(FOREIGN_KEY_VIOLATION)
            ) =>
        {
            let constraint = db_err.constraint().unwrap_or("unknown");
            PersistenceFailure::Conflict(format!("violates constraint {constraint}"))
        }
        _ => PersistenceFailure::Internal,
    }
}

impl From<PersistenceFailure> for CoreError {
    fn from(failure: PersistenceFailure) -> Self {
        match failure {
            PersistenceFailure::Conflict(msg) => CoreError::Conflict(msg),
            other => CoreError::Internal(other.to_string()),
        }
    }
}
