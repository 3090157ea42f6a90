use axum::response::Html;

use crate::error::AppResult;
use crate::templates::{render, Page};
use crate::views::Empty;

/// GET /
pub async fn index() -> AppResult<Html<String>> {
    Ok(render(Page::Home, &Empty::default())?)
}
