//! Fixed-size page arithmetic for question listings.

use crate::error::CoreError;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page requested when the caller omits `?page=`.
pub const DEFAULT_PAGE: i64 = 1;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
}

impl Page {
    /// Build a page from an optional user-supplied number.
    ///
    /// Pages are 1-based. Zero and negative numbers are rejected.
    pub fn new(number: Option<i64>) -> Result<Self, CoreError> {
        let number = number.unwrap_or(DEFAULT_PAGE);
        if number < 1 {
            return Err(CoreError::Validation(format!(
                "page must be 1 or greater, got {number}"
            )));
        }
        Ok(Self { number })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE,
        }
    }
}
