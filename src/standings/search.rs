use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::snapshot::{ParticipantStanding, TeamStanding};

/// The three standings views.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ViewMode {
    /// Current stage results, ordered by stage rank.
    #[default]
    #[strum(to_string = "stage")]
    Stage,
    /// Overall individual standings.
    #[strum(to_string = "overall")]
    Overall,
    /// Team ("directie") standings.
    #[strum(to_string = "team", serialize = "directie")]
    #[serde(alias = "directie")]
    Team,
}

/// Rows that can be matched by the search box.
pub trait Searchable {
    /// `needle` is already lowercased, has no whitespace and is never empty.
    fn matches(&self, needle: &str, mode: ViewMode) -> bool;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn matches(&self, needle: &str, mode: ViewMode) -> bool {
        (**self).matches(needle, mode)
    }
}

impl Searchable for ParticipantStanding {
    fn matches(&self, needle: &str, _mode: ViewMode) -> bool {
        contains_ignore_case(&self.participant_name, needle)
            || contains_ignore_case(&self.team_name, needle)
    }
}

impl Searchable for TeamStanding {
    fn matches(&self, needle: &str, mode: ViewMode) -> bool {
        if contains_ignore_case(&self.team_name, needle) {
            return true;
        }

        mode == ViewMode::Team
            && self
                .overall_participant_contributions
                .iter()
                .any(|c| contains_ignore_case(&c.participant_name, needle))
    }
}

/// Case-insensitive substring search over `items`.
///
/// Whitespace is ignored on both sides, so "team x" finds "Max Teamx" as well
/// as "Team X". A blank query returns every item. Matches keep their original
/// relative order.
pub fn filter_by_text<T>(items: &[T], query: &str, mode: ViewMode) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches(&needle, mode))
        .cloned()
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
