//! Domain logic shared by the Fyyur site and the Trivia API.
//!
//! Nothing in this crate performs I/O; the database and HTTP layers build on
//! top of it.

pub mod areas;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod quiz;
pub mod schedule;
pub mod search;
pub mod types;
