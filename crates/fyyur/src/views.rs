//! Template contexts.
//!
//! Timestamps are formatted here because liquid has no notion of time zones.

use fsnd_core::areas::Area;
use fsnd_core::schedule::partition_by_timing;
use fsnd_core::types::{DbId, Timestamp};
use fsnd_db::models::artist::ArtistWithGenres;
use fsnd_db::models::show::{ArtistShow, ShowListing, VenueShow};
use fsnd_db::models::venue::VenueWithGenres;
use serde::Serialize;

/// Display format for show start times.
pub const DISPLAY_TIME_FORMAT: &str = "%a %b %-d, %Y %-I:%M%p";

pub fn display_time(start_time: Timestamp) -> String {
    start_time.format(DISPLAY_TIME_FORMAT).to_string()
}

/// One show as listed on a venue or artist page: the other side's id,
/// name and picture.
#[derive(Debug, Serialize)]
pub struct ShowCard {
    pub id: DbId,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

impl From<VenueShow> for ShowCard {
    fn from(show: VenueShow) -> Self {
        Self {
            id: show.artist_id,
            name: show.artist_name,
            image_link: show.artist_image_link,
            start_time: display_time(show.start_time),
        }
    }
}

impl From<ArtistShow> for ShowCard {
    fn from(show: ArtistShow) -> Self {
        Self {
            id: show.venue_id,
            name: show.venue_name,
            image_link: show.venue_image_link,
            start_time: display_time(show.start_time),
        }
    }
}

/// Shows split around `now`.
#[derive(Debug, Serialize)]
pub struct ShowSplit {
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ShowSplit {
    pub fn new<S, F>(shows: Vec<S>, now: Timestamp, start_of: F) -> Self
    where
        S: Into<ShowCard>,
        F: Fn(&S) -> Timestamp,
    {
        let (past, upcoming) = partition_by_timing(shows, now, start_of);
        let past_shows: Vec<ShowCard> = past.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<ShowCard> = upcoming.into_iter().map(Into::into).collect();
        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VenuePage {
    pub venue: VenueWithGenres,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub artist: ArtistWithGenres,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

#[derive(Debug, Serialize)]
pub struct AreasPage<T: Serialize> {
    pub areas: Vec<Area<T>>,
}

#[derive(Debug, Serialize)]
pub struct ListPage<T: Serialize> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct SearchPage<T: Serialize> {
    pub search_term: String,
    pub count: usize,
    pub items: Vec<T>,
}

impl<T: Serialize> SearchPage<T> {
    pub fn new(search_term: String, items: Vec<T>) -> Self {
        Self {
            search_term,
            count: items.len(),
            items,
        }
    }
}

/// A row on the `/shows` page.
#[derive(Debug, Serialize)]
pub struct ShowRow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: display_time(show.start_time),
        }
    }
}

/// Context for the generic error page.
#[derive(Debug, Serialize)]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Empty {}
