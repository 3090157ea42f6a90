pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artists, home, shows, venues};
use crate::state::AppState;

/// Build the site's route tree.
///
/// ```text
/// GET    /                        -> home::index
///
/// GET    /venues                  -> venues::list
/// POST   /venues/search           -> venues::search
/// GET    /venues/create           -> venues::create_form
/// POST   /venues/create           -> venues::create
/// GET    /venues/{id}             -> venues::show
/// DELETE /venues/{id}             -> venues::delete
/// GET    /venues/{id}/edit        -> venues::edit_form
/// POST   /venues/{id}/edit        -> venues::edit
///
/// GET    /artists                 -> artists::list
/// POST   /artists/search          -> artists::search
/// GET    /artists/create          -> artists::create_form
/// POST   /artists/create          -> artists::create
/// GET    /artists/{id}            -> artists::show
/// DELETE /artists/{id}            -> artists::delete
/// GET    /artists/{id}/edit       -> artists::edit_form
/// POST   /artists/{id}/edit       -> artists::edit
///
/// GET    /shows                   -> shows::list
/// GET    /shows/create            -> shows::create_form
/// POST   /shows/create            -> shows::create
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
}

fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create),
        )
        .route("/venues/{id}", get(venues::show).delete(venues::delete))
        .route(
            "/venues/{id}/edit",
            get(venues::edit_form).post(venues::edit),
        )
}

fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create),
        )
        .route("/artists/{id}", get(artists::show).delete(artists::delete))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_form).post(artists::edit),
        )
}

fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::create_form).post(shows::create))
}
