//! Show timing: past/upcoming classification and start-time parsing.

use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Accepted `start_time` input formats, tried in order.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Display format used when echoing a start time back into a form.
pub const START_TIME_FORM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show strictly before `now` is past; anything else is upcoming.
    pub fn classify(start_time: Timestamp, now: Timestamp) -> Self {
        if start_time < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

/// Split items into `(past, upcoming)` relative to `now`, preserving order.
pub fn partition_by_timing<T, F>(items: Vec<T>, now: Timestamp, start_of: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> Timestamp,
{
    items
        .into_iter()
        .partition(|item| ShowTiming::classify(start_of(item), now) == ShowTiming::Past)
}

/// Parse a form-submitted start time. Naive inputs are taken as UTC.
pub fn parse_start_time(input: &str) -> Result<Timestamp, CoreError> {
    let input = input.trim();
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "start_time '{input}' is not a valid date and time (expected YYYY-MM-DD HH:MM:SS)"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn classifies_relative_to_now() {
        let now = Utc::now();
        assert_eq!(
            ShowTiming::classify(now - Duration::hours(1), now),
            ShowTiming::Past
        );
        assert_eq!(
            ShowTiming::classify(now + Duration::hours(1), now),
            ShowTiming::Upcoming
        );
        assert_eq!(ShowTiming::classify(now, now), ShowTiming::Upcoming);
    }

    #[test]
    fn partition_keeps_order() {
        let now = Utc::now();
        let starts = vec![
            now - Duration::days(2),
            now + Duration::days(1),
            now - Duration::days(1),
            now + Duration::days(3),
        ];
        let (past, upcoming) = partition_by_timing(starts.clone(), now, |t| *t);
        assert_eq!(past, vec![starts[0], starts[2]]);
        assert_eq!(upcoming, vec![starts[1], starts[3]]);
    }

    #[test]
    fn parses_form_and_iso_formats() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01 20:00:00").unwrap(), expected);
        assert_eq!(parse_start_time("2035-04-01T20:00").unwrap(), expected);
        assert_eq!(parse_start_time("2035-04-01T20:00:00Z").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("").is_err());
    }
}
