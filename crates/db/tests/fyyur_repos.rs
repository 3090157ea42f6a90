//! Integration tests for the Fyyur repositories.
//!
//! Exercises the repository layer against a real database:
//! - Venue/artist creation with genre links
//! - Upcoming-show counts and search
//! - Full-record replacement of fields and genres
//! - Application-level cascade on delete

use chrono::{Duration, Utc};
use fsnd_db::models::artist::ArtistInput;
use fsnd_db::models::show::CreateShow;
use fsnd_db::models::venue::VenueInput;
use fsnd_db::repositories::{ArtistRepo, GenreRepo, ShowRepo, VenueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str, genres: &[&str]) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn new_artist(name: &str, genres: &[&str]) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        image_link: Some("https://example.com/artist.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venue: true,
        seeking_description: Some("Looking for shows".to_string()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn genre_table_is_seeded_with_form_choices(pool: PgPool) {
    let genres = GenreRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    for expected in fsnd_core::listing::GENRES {
        assert!(names.contains(expected), "missing genre {expected}");
    }
}

// ---------------------------------------------------------------------------
// Venues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn create_venue_links_known_genres_only(pool: PgPool) {
    let venue = VenueRepo::create(
        &pool,
        &new_venue("The Musical Hop", "San Francisco", "CA", &["Jazz", "Reggae", "Polka"]),
    )
    .await
    .unwrap();

    let found = VenueRepo::find_with_genres(&pool, venue.id).await.unwrap().unwrap();
    assert_eq!(found.venue.name, "The Musical Hop");
    assert_eq!(found.genres, vec!["Jazz".to_string(), "Reggae".to_string()]);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn summaries_count_only_upcoming_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hop", "San Francisco", "CA", &["Jazz"]))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals", &["Rock n Roll"]))
        .await
        .unwrap();
    let now = Utc::now();

    for offset in [-2, 1, 3] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: now + Duration::days(offset),
            },
        )
        .await
        .unwrap();
    }

    let venues = VenueRepo::list_summaries(&pool, now).await.unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].num_upcoming_shows, 2);

    let artists = ArtistRepo::list_summaries(&pool, now).await.unwrap();
    assert_eq!(artists[0].num_upcoming_shows, 2);

    assert_eq!(VenueRepo::shows(&pool, venue.id).await.unwrap().len(), 3);
    assert_eq!(ArtistRepo::shows(&pool, artist.id).await.unwrap()[0].venue_name, "Hop");
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn venue_search_is_case_insensitive(pool: PgPool) {
    for name in ["The Musical Hop", "Park Square Live Music & Coffee", "The Dueling Pianos Bar"] {
        VenueRepo::create(&pool, &new_venue(name, "San Francisco", "CA", &["Jazz"]))
            .await
            .unwrap();
    }

    let now = Utc::now();
    let hop = VenueRepo::search(&pool, &fsnd_core::search::contains_pattern("hop"), now)
        .await
        .unwrap();
    assert_eq!(hop.len(), 1);
    assert_eq!(hop[0].name, "The Musical Hop");

    let music = VenueRepo::search(&pool, &fsnd_core::search::contains_pattern("Music"), now)
        .await
        .unwrap();
    assert_eq!(music.len(), 2);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn replace_venue_overwrites_fields_and_genres(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Old", "Austin", "TX", &["Blues", "Folk"]))
        .await
        .unwrap();

    let mut input = new_venue("New", "Dallas", "TX", &["Soul"]);
    input.seeking_talent = true;
    let replaced = VenueRepo::replace(&pool, venue.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.name, "New");
    assert_eq!(replaced.city, "Dallas");
    assert!(replaced.seeking_talent);

    let genres = GenreRepo::names_for_venue(&pool, venue.id).await.unwrap();
    assert_eq!(genres, vec!["Soul".to_string()]);

    let missing = VenueRepo::replace(&pool, 999_999, &input).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn deleting_venue_cascades_to_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Gone", "Austin", "TX", &["Funk"]))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Stays", &["Funk"]))
        .await
        .unwrap();
    let show = ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    assert!(VenueRepo::delete(&pool, venue.id).await.unwrap());
    assert!(VenueRepo::find_by_id(&pool, venue.id).await.unwrap().is_none());
    assert!(ShowRepo::find_by_id(&pool, show.id).await.unwrap().is_none());
    assert!(ArtistRepo::shows(&pool, artist.id).await.unwrap().is_empty());
    assert!(ArtistRepo::find_by_id(&pool, artist.id).await.unwrap().is_some());

    assert!(!VenueRepo::delete(&pool, venue.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn deleting_artist_cascades_to_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Stays", "Austin", "TX", &["Funk"]))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Gone", &["Funk", "Soul"]))
        .await
        .unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() - Duration::days(7),
        },
    )
    .await
    .unwrap();

    assert!(ArtistRepo::delete(&pool, artist.id).await.unwrap());
    assert!(VenueRepo::shows(&pool, venue.id).await.unwrap().is_empty());
    assert!(ShowRepo::list_listings(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn show_with_unknown_artist_is_rejected(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hop", "Austin", "TX", &["Funk"]))
        .await
        .unwrap();
    let err = ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: 424_242,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert_eq!(db_err.code().as_deref(), Some("23503")),
        other => panic!("expected foreign key violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn show_listings_denormalize_both_sides(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "SF", "CA", &["Jazz"]))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals", &["Rock n Roll"]))
        .await
        .unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap();

    let listings = ShowRepo::list_listings(&pool).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].venue_name, "The Musical Hop");
    assert_eq!(listings[0].artist_name, "Guns N Petals");
    assert_eq!(
        listings[0].artist_image_link.as_deref(),
        Some("https://example.com/artist.jpg")
    );
}
