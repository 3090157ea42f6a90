#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use fsnd_core::quiz::QuizSelection;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fsnd_trivia::config::ServerConfig;
use fsnd_trivia::router::build_app_router;
use fsnd_trivia::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Quiz selection is `First` so quiz assertions are deterministic.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        quiz_selection: QuizSelection::First,
    }
}

/// Build the full application router (same middleware as production).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

/// POST an arbitrary (possibly malformed) body as `application/json`.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a question through the API and return its id.
pub async fn create_question(pool: &PgPool, question: &str, category: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({
            "question": question,
            "answer": format!("answer to {question}"),
            "difficulty": 1,
            "category": category,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Insert `n` questions in `category` and return their ids in creation order.
pub async fn seed_questions(pool: &PgPool, n: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        ids.push(create_question(pool, &format!("Question {category}-{i}"), category).await);
    }
    ids
}
