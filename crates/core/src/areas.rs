//! Grouping of venues by location for the venue index page.

use serde::Serialize;

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items into areas keyed by `(city, state)`.
///
/// Areas appear in the order their first item appears; items keep their
/// relative order. City matching is exact, so callers should sort first if
/// they want stable output.
pub fn group_by_area<T, F>(items: Vec<T>, location_of: F) -> Vec<Area<T>>
where
    F: Fn(&T) -> (&str, &str),
{
    let mut areas: Vec<Area<T>> = Vec::new();
    for item in items {
        let (city, state) = location_of(&item);
        let existing = areas
            .iter()
            .position(|a| a.city == city && a.state == state);
        match existing {
            Some(idx) => areas[idx].venues.push(item),
            None => areas.push(Area {
                city: city.to_string(),
                state: state.to_string(),
                venues: vec![item],
            }),
        }
    }
    areas
}
