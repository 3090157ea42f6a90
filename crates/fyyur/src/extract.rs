//! Extractor wrappers whose rejections render as [`AppError`] pages.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// URL-encoded form body. Repeated keys (`genres=Jazz&genres=Soul`)
/// collect into a `Vec`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum_extra::extract::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Path parameters. A segment that does not parse cannot name a record, so
/// it becomes 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
