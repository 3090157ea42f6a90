//! Fyyur: venue, artist and show listings rendered as HTML.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod templates;
pub mod views;
