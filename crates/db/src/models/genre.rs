//! Genre lookup rows.

use fsnd_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the pre-populated `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
