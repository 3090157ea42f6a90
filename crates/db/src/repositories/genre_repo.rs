//! Repository for the `genres` lookup table and its join tables.

use fsnd_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

pub struct GenreRepo;

impl GenreRepo {
    /// All genres in name order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Genre names linked to a venue.
    pub async fn names_for_venue(pool: &PgPool, venue_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT g.name FROM genres g
             JOIN venue_genres vg ON vg.genre_id = g.id
             WHERE vg.venue_id = $1
             ORDER BY g.name",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Genre names linked to an artist.
    pub async fn names_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT g.name FROM genres g
             JOIN artist_genres ag ON ag.genre_id = g.id
             WHERE ag.artist_id = $1
             ORDER BY g.name",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}
