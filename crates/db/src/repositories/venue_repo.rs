//! Repository for the `venues` table.

use fsnd_core::types::{DbId, Timestamp};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::show::VenueShow;
use crate::models::venue::{Venue, VenueInput, VenueSummary, VenueWithGenres};
use crate::repositories::GenreRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
     website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Venue summary columns with an upcoming-show count relative to `$1`.
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state,
            COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
     FROM venues v
     LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a venue and link its genres in one transaction.
    pub async fn create(pool: &PgPool, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, image_link, facebook_link,
                 website_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        Self::link_genres(&mut tx, venue.id, &input.genres).await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a venue by ID, enriched with its genre names.
    pub async fn find_with_genres(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VenueWithGenres>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(venue) => {
                let genres = GenreRepo::names_for_venue(pool, venue.id).await?;
                Ok(Some(VenueWithGenres { venue, genres }))
            }
            None => Ok(None),
        }
    }

    /// All venues with their upcoming-show counts, ordered by state, city, name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             GROUP BY v.id
             ORDER BY v.state, v.city, v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Venues whose name matches an `ILIKE` pattern, ordered by name.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             WHERE v.name ILIKE $2
             GROUP BY v.id
             ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Shows at a venue with the artist side denormalized, by start time.
    pub async fn shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Replace every field of a venue and its genre set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &VenueInput,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_talent = $10,
                seeking_description = $11,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(venue) = venue else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM venue_genres WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        Self::link_genres(&mut tx, id, &input.genres).await?;

        tx.commit().await?;
        Ok(Some(venue))
    }

    /// Delete a venue together with its shows and genre links.
    ///
    /// Returns `true` if the venue existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM venue_genres WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(venue_id = id, shows_removed = shows.rows_affected(), "Venue deleted");
        Ok(true)
    }

    /// Link genres by name. Names missing from the lookup table are ignored.
    async fn link_genres(
        tx: &mut Transaction<'_, Postgres>,
        venue_id: DbId,
        genres: &[String],
    ) -> Result<(), sqlx::Error> {
        if genres.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO venue_genres (venue_id, genre_id)
             SELECT $1, id FROM genres WHERE name = ANY($2)
             ON CONFLICT DO NOTHING",
        )
        .bind(venue_id)
        .bind(genres)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
