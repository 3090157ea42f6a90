//! Handlers for the `/artists` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Utc;
use fsnd_core::error::CoreError;
use fsnd_core::search::contains_pattern;
use fsnd_core::types::DbId;
use fsnd_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppForm, AppPath};
use crate::forms::{ArtistForm, FormPage, SearchForm};
use crate::handlers::{home_with_flash, listing_failed};
use crate::state::AppState;
use crate::templates::{render, Flash, Page};
use crate::views::{ArtistPage, ListPage, SearchPage, ShowSplit};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

fn form_page(form: ArtistForm, action: String, heading: &str) -> FormPage<ArtistForm> {
    FormPage::new(form, ArtistForm::FIELDS, action, heading.to_string())
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items = ArtistRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(render(Page::Artists, &ListPage { items })?)
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    AppForm(form): AppForm<SearchForm>,
) -> AppResult<Html<String>> {
    let pattern = contains_pattern(&form.search_term);
    let artists = ArtistRepo::search(&state.pool, &pattern, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = artists.len(), "Artist search");
    Ok(render(Page::SearchArtists, &SearchPage::new(form.search_term, artists))?)
}

/// GET /artists/{id}
pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Html<String>> {
    let artist = ArtistRepo::find_with_genres(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ArtistRepo::shows(&state.pool, id).await?;

    let page = ArtistPage {
        artist,
        shows: ShowSplit::new(shows, Utc::now(), |s| s.start_time),
    };
    Ok(render(Page::ShowArtist, &page)?)
}

/// GET /artists/create
pub async fn create_form() -> AppResult<Html<String>> {
    let page = form_page(ArtistForm::default(), "/artists/create".into(), "List a new artist");
    Ok(render(Page::ArtistForm, &page)?)
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    AppForm(form): AppForm<ArtistForm>,
) -> AppResult<Response> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err((form, errors)) => {
            let page = form_page(form, "/artists/create".into(), "List a new artist")
                .with_errors(errors);
            return Ok((StatusCode::BAD_REQUEST, render(Page::ArtistForm, &page)?).into_response());
        }
    };

    let flash = match ArtistRepo::create(&state.pool, &input).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
            Flash::success(format!("Artist {} was successfully listed!", artist.name))
        }
        Err(err) => listing_failed("Artist", &input.name, &err),
    };
    Ok(home_with_flash(flash)?.into_response())
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Html<String>> {
    let artist = ArtistRepo::find_with_genres(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let heading = format!("Edit artist {}", artist.artist.name);
    let page = form_page(artist.into(), format!("/artists/{id}/edit"), &heading);
    Ok(render(Page::ArtistForm, &page)?)
}

/// POST /artists/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppForm(form): AppForm<ArtistForm>,
) -> AppResult<Response> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err((form, errors)) => {
            let page = form_page(form, format!("/artists/{id}/edit"), "Edit artist")
                .with_errors(errors);
            return Ok((StatusCode::BAD_REQUEST, render(Page::ArtistForm, &page)?).into_response());
        }
    };

    ArtistRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(artist_id = id, "Artist updated");
    Ok(Redirect::to(&format!("/artists/{id}")).into_response())
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
