//! HTML form bodies and their validation.
//!
//! Forms keep every field as submitted (strings) so a failed submission can
//! be re-rendered exactly as the user typed it.

use std::collections::BTreeMap;

use chrono::Utc;
use fsnd_core::listing::{
    non_blank, validate_genres, validate_optional_url, validate_phone, validate_required,
    validate_state, GENRES, US_STATES,
};
use fsnd_core::schedule::{parse_start_time, START_TIME_FORM_FORMAT};
use fsnd_core::types::DbId;
use fsnd_db::models::artist::{ArtistInput, ArtistWithGenres};
use fsnd_db::models::show::CreateShow;
use fsnd_db::models::venue::{VenueInput, VenueWithGenres};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Per-field error messages, keyed by field name.
///
/// Every field of the form has an entry (possibly empty) so templates can
/// iterate `errors.<field>` unconditionally.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

fn empty_errors(fields: &[&str]) -> FieldErrors {
    fields.iter().map(|f| (f.to_string(), Vec::new())).collect()
}

/// Flatten validator output into [`FieldErrors`].
pub fn field_errors(fields: &[&str], errors: &ValidationErrors) -> FieldErrors {
    let mut out = empty_errors(fields);
    for (field, errs) in errors.field_errors() {
        let messages = errs.iter().map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        });
        out.entry(field.to_string()).or_default().extend(messages);
    }
    out
}

/// Checkbox semantics: any submitted value means checked.
fn checked(value: &Option<String>) -> bool {
    value.is_some()
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct VenueForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = 120, message = "Must be at most 120 characters")
    )]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = 120, message = "Must be at most 120 characters")
    )]
    pub address: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_optional_url"),
        length(max = 500, message = "Must be at most 500 characters")
    )]
    pub image_link: String,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[serde(default)]
    #[validate(
        custom(function = "validate_optional_url"),
        length(max = 120, message = "Must be at most 120 characters")
    )]
    pub facebook_link: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_url"))]
    pub website_link: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "city",
        "state",
        "address",
        "phone",
        "image_link",
        "genres",
        "facebook_link",
        "website_link",
        "seeking_talent",
        "seeking_description",
    ];

    /// Validate and convert into the repository DTO.
    pub fn into_input(self) -> Result<VenueInput, (Self, FieldErrors)> {
        if let Err(errors) = self.validate() {
            let errors = field_errors(Self::FIELDS, &errors);
            return Err((self, errors));
        }
        Ok(VenueInput {
            seeking_talent: checked(&self.seeking_talent),
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state,
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            image_link: non_blank(Some(&self.image_link)),
            facebook_link: non_blank(Some(&self.facebook_link)),
            website_link: non_blank(Some(&self.website_link)),
            seeking_description: non_blank(Some(&self.seeking_description)),
            genres: self.genres,
        })
    }
}

impl From<VenueWithGenres> for VenueForm {
    fn from(record: VenueWithGenres) -> Self {
        let venue = record.venue;
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link.unwrap_or_default(),
            genres: record.genres,
            facebook_link: venue.facebook_link.unwrap_or_default(),
            website_link: venue.website_link.unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ArtistForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = 120, message = "Must be at most 120 characters")
    )]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_optional_url"),
        length(max = 500, message = "Must be at most 500 characters")
    )]
    pub image_link: String,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[serde(default)]
    #[validate(
        custom(function = "validate_optional_url"),
        length(max = 120, message = "Must be at most 120 characters")
    )]
    pub facebook_link: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_url"))]
    pub website_link: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "city",
        "state",
        "phone",
        "image_link",
        "genres",
        "facebook_link",
        "website_link",
        "seeking_venue",
        "seeking_description",
    ];

    pub fn into_input(self) -> Result<ArtistInput, (Self, FieldErrors)> {
        if let Err(errors) = self.validate() {
            let errors = field_errors(Self::FIELDS, &errors);
            return Err((self, errors));
        }
        Ok(ArtistInput {
            seeking_venue: checked(&self.seeking_venue),
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state,
            phone: self.phone.trim().to_string(),
            image_link: non_blank(Some(&self.image_link)),
            facebook_link: non_blank(Some(&self.facebook_link)),
            website_link: non_blank(Some(&self.website_link)),
            seeking_description: non_blank(Some(&self.seeking_description)),
            genres: self.genres,
        })
    }
}

impl From<ArtistWithGenres> for ArtistForm {
    fn from(record: ArtistWithGenres) -> Self {
        let artist = record.artist;
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link.unwrap_or_default(),
            genres: record.genres,
            facebook_link: artist.facebook_link.unwrap_or_default(),
            website_link: artist.website_link.unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

fn validate_venue_id(value: &str) -> Result<(), ValidationError> {
    parse_id(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("venue_id").with_message("Venue ID is not valid".into()))
}

fn validate_artist_id(value: &str) -> Result<(), ValidationError> {
    parse_id(value).map(|_| ()).ok_or_else(|| {
        ValidationError::new("artist_id").with_message("Artist ID is not valid".into())
    })
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    parse_start_time(value).map(|_| ()).map_err(|_| {
        ValidationError::new("start_time")
            .with_message("Start time must look like YYYY-MM-DD HH:MM:SS".into())
    })
}

fn parse_id(value: &str) -> Option<DbId> {
    value.trim().parse().ok()
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ShowForm {
    #[serde(default)]
    #[validate(custom(function = "validate_artist_id"))]
    pub artist_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_venue_id"))]
    pub venue_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

impl Default for ShowForm {
    /// Start time defaults to the current time, ready to edit.
    fn default() -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: Utc::now().format(START_TIME_FORM_FORMAT).to_string(),
        }
    }
}

impl ShowForm {
    pub const FIELDS: &'static [&'static str] = &["artist_id", "venue_id", "start_time"];

    /// Validate field shapes. Whether the ids exist is checked by the handler.
    pub fn into_input(self) -> Result<CreateShow, (Self, FieldErrors)> {
        if let Err(errors) = self.validate() {
            let errors = field_errors(Self::FIELDS, &errors);
            return Err((self, errors));
        }
        match (
            parse_id(&self.venue_id),
            parse_id(&self.artist_id),
            parse_start_time(&self.start_time).ok(),
        ) {
            (Some(venue_id), Some(artist_id), Some(start_time)) => Ok(CreateShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => {
                let errors = empty_errors(Self::FIELDS);
                Err((self, errors))
            }
        }
    }
}

/// Search box on the venue and artist pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Context shared by the venue, artist and show form pages.
#[derive(Debug, Serialize)]
pub struct FormPage<F: Serialize> {
    pub form: F,
    pub errors: FieldErrors,
    /// Where the form posts to.
    pub action: String,
    pub heading: String,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

impl<F: Serialize> FormPage<F> {
    pub fn new(form: F, fields: &[&str], action: String, heading: String) -> Self {
        Self {
            form,
            errors: empty_errors(fields),
            action,
            heading,
            states: US_STATES,
            genre_choices: GENRES,
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }
}

/// Record an extra error found after validation (e.g. a missing venue).
pub fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
