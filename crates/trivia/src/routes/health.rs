use axum::extract::State;
use axum::{routing::get, Json, Router};
use fsnd_db::health::HealthReport;

use crate::state::AppState;

const SERVICE: &str = "fsnd-trivia";

/// GET /health -- always 200, `db_healthy` carries the database state.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::check(&state.pool, SERVICE, env!("CARGO_PKG_VERSION")).await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
