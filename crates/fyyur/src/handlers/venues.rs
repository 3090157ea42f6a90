//! Handlers for the `/venues` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Utc;
use fsnd_core::areas::group_by_area;
use fsnd_core::error::CoreError;
use fsnd_core::search::contains_pattern;
use fsnd_core::types::DbId;
use fsnd_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppForm, AppPath};
use crate::forms::{FormPage, SearchForm, VenueForm};
use crate::handlers::{home_with_flash, listing_failed};
use crate::state::AppState;
use crate::templates::{render, Flash, Page};
use crate::views::{AreasPage, SearchPage, ShowSplit, VenuePage};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

fn form_page(form: VenueForm, action: String, heading: &str) -> FormPage<VenueForm> {
    FormPage::new(form, VenueForm::FIELDS, action, heading.to_string())
}

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let venues = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    let areas = group_by_area(venues, |v| (v.city.as_str(), v.state.as_str()));
    Ok(render(Page::Venues, &AreasPage { areas })?)
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    AppForm(form): AppForm<SearchForm>,
) -> AppResult<Html<String>> {
    let pattern = contains_pattern(&form.search_term);
    let venues = VenueRepo::search(&state.pool, &pattern, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = venues.len(), "Venue search");
    Ok(render(Page::SearchVenues, &SearchPage::new(form.search_term, venues))?)
}

/// GET /venues/{id}
pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Html<String>> {
    let venue = VenueRepo::find_with_genres(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = VenueRepo::shows(&state.pool, id).await?;

    let page = VenuePage {
        venue,
        shows: ShowSplit::new(shows, Utc::now(), |s| s.start_time),
    };
    Ok(render(Page::ShowVenue, &page)?)
}

/// GET /venues/create
pub async fn create_form() -> AppResult<Html<String>> {
    let page = form_page(VenueForm::default(), "/venues/create".into(), "List a new venue");
    Ok(render(Page::VenueForm, &page)?)
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    AppForm(form): AppForm<VenueForm>,
) -> AppResult<Response> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err((form, errors)) => {
            let page = form_page(form, "/venues/create".into(), "List a new venue")
                .with_errors(errors);
            return Ok((StatusCode::BAD_REQUEST, render(Page::VenueForm, &page)?).into_response());
        }
    };

    let flash = match VenueRepo::create(&state.pool, &input).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
            Flash::success(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(err) => listing_failed("Venue", &input.name, &err),
    };
    Ok(home_with_flash(flash)?.into_response())
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Html<String>> {
    let venue = VenueRepo::find_with_genres(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let heading = format!("Edit venue {}", venue.venue.name);
    let page = form_page(venue.into(), format!("/venues/{id}/edit"), &heading);
    Ok(render(Page::VenueForm, &page)?)
}

/// POST /venues/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppForm(form): AppForm<VenueForm>,
) -> AppResult<Response> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err((form, errors)) => {
            let page = form_page(form, format!("/venues/{id}/edit"), "Edit venue")
                .with_errors(errors);
            return Ok((StatusCode::BAD_REQUEST, render(Page::VenueForm, &page)?).into_response());
        }
    };

    VenueRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(venue_id = id, "Venue updated");
    Ok(Redirect::to(&format!("/venues/{id}")).into_response())
}

/// DELETE /venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if VenueRepo::delete(&state.pool, id).await? {
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
