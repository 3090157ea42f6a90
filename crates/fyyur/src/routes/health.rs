//! JSON liveness route. The rest of the site is HTML.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use fsnd_db::health::HealthReport;

use crate::state::AppState;

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::check(&state.pool, "fsnd-fyyur", env!("CARGO_PKG_VERSION")).await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
