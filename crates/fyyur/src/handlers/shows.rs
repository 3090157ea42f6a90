//! Handlers for the `/shows` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fsnd_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use crate::error::AppResult;
use crate::extract::AppForm;
use crate::forms::{push_error, FormPage, ShowForm};
use crate::handlers::home_with_flash;
use crate::state::AppState;
use crate::templates::{render, Flash, Page};
use crate::views::{ListPage, ShowRow};

const CREATE_ACTION: &str = "/shows/create";
const CREATE_HEADING: &str = "List a new show";

fn form_page(form: ShowForm) -> FormPage<ShowForm> {
    FormPage::new(
        form,
        ShowForm::FIELDS,
        CREATE_ACTION.into(),
        CREATE_HEADING.into(),
    )
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items: Vec<ShowRow> = ShowRepo::list_listings(&state.pool)
        .await?
        .into_iter()
        .map(ShowRow::from)
        .collect();
    Ok(render(Page::Shows, &ListPage { items })?)
}

/// GET /shows/create
pub async fn create_form() -> AppResult<Html<String>> {
    Ok(render(Page::ShowForm, &form_page(ShowForm::default()))?)
}

/// POST /shows/create
///
/// Ids must parse and name existing records before the insert is tried.
pub async fn create(
    State(state): State<AppState>,
    AppForm(form): AppForm<ShowForm>,
) -> AppResult<Response> {
    let input = match form.clone().into_input() {
        Ok(input) => input,
        Err((form, errors)) => {
            let page = form_page(form).with_errors(errors);
            return Ok((StatusCode::BAD_REQUEST, render(Page::ShowForm, &page)?).into_response());
        }
    };

    let venue = VenueRepo::find_by_id(&state.pool, input.venue_id).await?;
    let artist = ArtistRepo::find_by_id(&state.pool, input.artist_id).await?;
    if venue.is_none() || artist.is_none() {
        let mut page = form_page(form);
        if venue.is_none() {
            push_error(&mut page.errors, "venue_id", "Venue ID is not valid");
        }
        if artist.is_none() {
            push_error(&mut page.errors, "artist_id", "Artist ID is not valid");
        }
        return Ok((StatusCode::BAD_REQUEST, render(Page::ShowForm, &page)?).into_response());
    }

    let flash = match ShowRepo::create(&state.pool, &input).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show listed"
            );
            Flash::success("Show was successfully listed!")
        }
        Err(err) => {
            let failure = fsnd_db::failure::classify_sqlx_error(&err);
            tracing::warn!(error = %err, cause = failure.label(), "Show listing failed");
            Flash::error(format!(
                "An error occurred. Show could not be listed ({}).",
                failure.label()
            ))
        }
    };
    Ok(home_with_flash(flash)?.into_response())
}
