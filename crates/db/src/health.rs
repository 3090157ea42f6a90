//! Liveness report behind both applications' `/health` routes.

use serde::Serialize;

use crate::DbPool;

/// Body of a `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Binary that answered, e.g. `fsnd-trivia`.
    pub service: &'static str,
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    /// Ping the database and describe the result for `service`.
    pub async fn check(pool: &DbPool, service: &'static str, version: &'static str) -> Self {
        let db_healthy = match crate::health_check(pool).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(service, error = %err, "Health check could not reach the database");
                false
            }
        };

        Self {
            service,
            status: if db_healthy { "ok" } else { "degraded" },
            version,
            db_healthy,
        }
    }
}
