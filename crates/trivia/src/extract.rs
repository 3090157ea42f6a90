//! Extractor wrappers whose rejections render as [`AppError`].
//!
//! Axum's stock extractors reply with plain-text bodies; these wrap them so
//! every failure uses the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body. Missing, malformed or mistyped bodies become 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string. Unparseable values become 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. `/questions/abc`)
/// cannot name a resource, so it becomes 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
