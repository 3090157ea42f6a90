//! HTTP-level tests for the artist pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, create_artist, create_show, create_venue, delete, get, post_form};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn artists_are_listed_by_name(pool: PgPool) {
    create_artist(&pool, "The Wild Sax Band").await;
    create_artist(&pool, "Guns N Petals").await;
    create_artist(&pool, "Matt Quevedo").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/artists").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let guns = html.find("Guns N Petals").unwrap();
    let matt = html.find("Matt Quevedo").unwrap();
    let wild = html.find("The Wild Sax Band").unwrap();
    assert!(guns < matt && matt < wild);
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn create_artist_flashes_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/artists/create", &common::artist_fields("Matt Quevedo")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist Matt Quevedo was successfully listed!"));
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn artist_with_bad_link_is_rejected(pool: PgPool) {
    let mut fields = common::artist_fields("Link Breaker");
    fields.retain(|(k, _)| *k != "website_link");
    fields.push(("website_link", "not a url"));

    let app = common::build_test_app(pool);
    let response = post_form(app, "/artists/create", &fields).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Must be a valid URL"));
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn artist_search_reports_upcoming_counts(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    create_artist(&pool, "Matt Quevedo").await;
    create_show(&pool, venue_id, artist_id, "2099-05-21 21:30:00").await;

    let app = common::build_test_app(pool);
    let response = post_form(app, "/artists/search", &[("search_term", "A")]).await;
    let html = body_text(response).await;
    assert!(html.contains("Number of search results for \"A\": 2"));
    assert!(html.contains("1 upcoming"));
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn artist_page_lists_venues_played(pool: PgPool) {
    let venue_id = create_venue(&pool, "Park Square Live Music and Coffee", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue_id, artist_id, "2019-06-15 23:00:00").await;

    let app = common::build_test_app(pool);
    let html = body_text(get(app, &format!("/artists/{artist_id}")).await).await;
    assert!(html.contains("1 Past Show"));
    assert!(html.contains("0 Upcoming Shows"));
    assert!(html.contains(&format!("/venues/{venue_id}")));
    assert!(html.contains("Rock n Roll"));
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn edit_artist_redirects_to_detail(pool: PgPool) {
    let artist_id = create_artist(&pool, "Before").await;

    let app = common::build_test_app(pool.clone());
    let mut fields = common::artist_fields("After");
    fields.push(("seeking_venue", "y"));
    let response = post_form(app, &format!("/artists/{artist_id}/edit"), &fields).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let app = common::build_test_app(pool);
    let html = body_text(get(app, &format!("/artists/{artist_id}")).await).await;
    assert!(html.contains("After"));
    assert!(html.contains("Currently seeking performance venues"));
}

#[sqlx::test(migrations = "../db/migrations/fyyur")]
async fn delete_artist_then_page_is_gone(pool: PgPool) {
    let artist_id = create_artist(&pool, "Short Lived").await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/artists/{artist_id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/artists/{artist_id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
