//! Next-question selection for quiz play.
//!
//! The quiz session lives entirely on the client: every request carries the
//! ids already asked, and the server picks one remaining question.

use std::collections::HashSet;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Category id meaning "all categories".
pub const ALL_CATEGORIES: DbId = 0;

/// How the next question is chosen among the eligible ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizSelection {
    /// Uniformly at random.
    #[default]
    Random,
    /// The eligible question with the lowest id.
    First,
}

impl FromStr for QuizSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "first" => Ok(Self::First),
            other => Err(format!(
                "unknown quiz selection '{other}', expected 'random' or 'first'"
            )),
        }
    }
}

/// Returns `None` for [`ALL_CATEGORIES`], otherwise the category id.
pub fn category_filter(category_id: DbId) -> Option<DbId> {
    (category_id != ALL_CATEGORIES).then_some(category_id)
}

/// Pick the next question id from `candidates`, skipping `previous`.
///
/// Returns `None` once every candidate has been asked.
pub fn pick_next<R: Rng + ?Sized>(
    candidates: &[DbId],
    previous: &[DbId],
    selection: QuizSelection,
    rng: &mut R,
) -> Option<DbId> {
    let asked: HashSet<DbId> = previous.iter().copied().collect();
    let mut remaining: Vec<DbId> = candidates
        .iter()
        .copied()
        .filter(|id| !asked.contains(id))
        .collect();

    match selection {
        QuizSelection::First => {
            remaining.sort_unstable();
            remaining.first().copied()
        }
        QuizSelection::Random => remaining.choose(rng).copied(),
    }
}
