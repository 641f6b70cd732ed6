use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SnapshotError;

const PREFIX: &str = "stage_";

/// Key of a per-stage leaderboard, `"stage_N"` with N >= 1.
///
/// Ordering is numeric on N, so `stage_2 < stage_10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StageKey(u32);

impl StageKey {
    /// Returns `None` for stage 0.
    pub fn new(stage_number: u32) -> Option<Self> {
        (stage_number >= 1).then_some(Self(stage_number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl FromStr for StageKey {
    type Err = SnapshotError;

    /// Only the canonical form is accepted: no sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SnapshotError::InvalidStageKey(s.to_string());

        let digits = s.strip_prefix(PREFIX).ok_or_else(invalid)?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        digits
            .parse::<u32>()
            .ok()
            .and_then(StageKey::new)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for StageKey {
    type Error = SnapshotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StageKey> for String {
    fn from(key: StageKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}
