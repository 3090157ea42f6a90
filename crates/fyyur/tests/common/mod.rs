#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fsnd_fyyur::config::ServerConfig;
use fsnd_fyyur::router::build_app_router;
use fsnd_fyyur::state::AppState;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router (same middleware as production).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
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

/// POST `application/x-www-form-urlencoded` fields. Keys may repeat.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    send(app, request).await
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fn encode(value: &str) -> String {
        value
            .bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    (b as char).to_string()
                }
                b' ' => "+".to_string(),
                other => format!("%{other:02X}"),
            })
            .collect()
    }
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn venue_fields<'a>(name: &'a str, city: &'a str, state: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", city),
        ("state", state),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("image_link", "https://images.example.com/venue.jpg"),
        ("facebook_link", ""),
        ("website_link", "https://www.themusicalhop.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist"),
    ]
}

pub fn artist_fields(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("image_link", "https://images.example.com/artist.jpg"),
        ("facebook_link", "https://www.facebook.com/GunsNPetals"),
        ("website_link", ""),
        ("seeking_description", ""),
    ]
}

/// Create a venue through the site and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_form(app, "/venues/create", &venue_fields(name, city, state)).await;
    assert_eq!(response.status(), 200);
    sqlx::query_scalar("SELECT id FROM venues WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create an artist through the site and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_form(app, "/artists/create", &artist_fields(name)).await;
    assert_eq!(response.status(), 200);
    sqlx::query_scalar("SELECT id FROM artists WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create a show through the site.
pub async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) {
    let app = build_test_app(pool.clone());
    let venue_id = venue_id.to_string();
    let artist_id = artist_id.to_string();
    let response = post_form(
        app,
        "/shows/create",
        &[
            ("venue_id", venue_id.as_str()),
            ("artist_id", artist_id.as_str()),
            ("start_time", start_time),
        ],
    )
    .await;
    assert_eq!(response.status(), 200);
}
