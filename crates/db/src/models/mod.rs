//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create/replace DTO used by the repository layer
//! - Any joined read models the pages need

pub mod artist;
pub mod category;
pub mod genre;
pub mod question;
pub mod show;
pub mod venue;
