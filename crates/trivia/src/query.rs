//! Shared query parameter types for API handlers.

use fsnd_core::pagination::Page;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `?page=N` pagination parameter, 1-based.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// Validate the requested page. A page below 1 names nothing, so it is
    /// reported as not found rather than as a bad request.
    pub fn page(&self) -> AppResult<Page> {
        Page::new(self.page).map_err(|e| AppError::NotFound(e.to_string()))
    }
}
