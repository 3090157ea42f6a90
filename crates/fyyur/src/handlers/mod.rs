pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use axum::response::Html;
use fsnd_db::failure::classify_sqlx_error;

use crate::error::AppResult;
use crate::templates::{render_with_flashes, Flash, Page};
use crate::views::Empty;

/// Home page with a single flash message, as shown after a create.
pub(crate) fn home_with_flash(flash: Flash) -> AppResult<Html<String>> {
    Ok(render_with_flashes(Page::Home, &Empty::default(), &[flash])?)
}

/// Flash for a failed listing, naming the typed cause.
pub(crate) fn listing_failed(kind: &str, name: &str, err: &sqlx::Error) -> Flash {
    let failure = classify_sqlx_error(err);
    tracing::warn!(error = %err, cause = failure.label(), kind, name, "Listing failed");
    Flash::error(format!(
        "An error occurred. {kind} {name} could not be listed ({}).",
        failure.label()
    ))
}
