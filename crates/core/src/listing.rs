//! Validation rules for venue, artist and show listings.
//!
//! The custom validators here plug into `#[validate(custom(function = ...))]`
//! on the form structs of the web layer.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateUrl, ValidationError};

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

/// Two-letter state codes offered by the listing forms.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Genre names seeded into the `genres` table.
///
/// Must stay in sync with the fyyur seed migration.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];

/// `ddd-ddd-dddd`
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern is a valid regex")
});

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Phone numbers must look like `415-555-0123`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(invalid("phone", "Phone format must be xxx-xxx-xxxx"))
    }
}

/// State must be one of [`US_STATES`].
pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if US_STATES.contains(&state) {
        Ok(())
    } else {
        Err(invalid("state", "Not a valid choice"))
    }
}

/// At least one genre, each one of [`GENRES`].
pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(invalid("genres", "At least one genre is required"));
    }
    if genres.iter().any(|g| !GENRES.contains(&g.as_str())) {
        return Err(invalid("genres", "Not a valid choice"));
    }
    Ok(())
}

/// Optional link fields: empty is fine, otherwise it must parse as a URL.
pub fn validate_optional_url(link: &str) -> Result<(), ValidationError> {
    let link = link.trim();
    if link.is_empty() || link.validate_url() {
        Ok(())
    } else {
        Err(invalid("url", "Must be a valid URL"))
    }
}

/// Required text fields: whitespace-only counts as missing.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("required", "This field is required."))
    } else {
        Ok(())
    }
}

/// Collapse an optional form field to `None` when blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
