//! Repository for the `artists` table.

use fsnd_core::types::{DbId, Timestamp};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::artist::{Artist, ArtistInput, ArtistSummary, ArtistWithGenres};
use crate::models::show::ArtistShow;
use crate::repositories::GenreRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, \
     website_link, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert an artist and link its genres in one transaction.
    pub async fn create(pool: &PgPool, input: &ArtistInput) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, image_link, facebook_link,
                 website_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        Self::link_genres(&mut tx, artist.id, &input.genres).await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an artist by ID, enriched with its genre names.
    pub async fn find_with_genres(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtistWithGenres>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(artist) => {
                let genres = GenreRepo::names_for_artist(pool, artist.id).await?;
                Ok(Some(ArtistWithGenres { artist, genres }))
            }
            None => Ok(None),
        }
    }

    /// All artists with upcoming-show counts, ordered by name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        Self::search(pool, "%", now).await
    }

    /// Artists whose name matches an `ILIKE` pattern, ordered by name.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $2
             GROUP BY a.id
             ORDER BY a.name, a.id",
        )
        .bind(now)
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Shows by an artist with the venue side denormalized, by start time.
    pub async fn shows(pool: &PgPool, artist_id: DbId) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Replace every field of an artist and its genre set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ArtistInput,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                image_link = $6,
                facebook_link = $7,
                website_link = $8,
                seeking_venue = $9,
                seeking_description = $10,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(artist) = artist else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM artist_genres WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        Self::link_genres(&mut tx, id, &input.genres).await?;

        tx.commit().await?;
        Ok(Some(artist))
    }

    /// Delete an artist together with its shows and genre links.
    ///
    /// Returns `true` if the artist existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM artist_genres WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(artist_id = id, shows_removed = shows.rows_affected(), "Artist deleted");
        Ok(true)
    }

    async fn link_genres(
        tx: &mut Transaction<'_, Postgres>,
        artist_id: DbId,
        genres: &[String],
    ) -> Result<(), sqlx::Error> {
        if genres.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO artist_genres (artist_id, genre_id)
             SELECT $1, id FROM genres WHERE name = ANY($2)
             ON CONFLICT DO NOTHING",
        )
        .bind(artist_id)
        .bind(genres)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
