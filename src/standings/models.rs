use serde::{Deserialize, Serialize};

/// One stage of a participant's (or team's) results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageHistoryEntry {
    pub stage_number: u32,
    pub stage_score: u32,
    pub stage_rank: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// Stage podium counts across every stage in the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTally {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    pub fn award(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantMedals {
    pub participant_name: String,
    pub medals: MedalTally,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderContribution {
    pub rider: String,
    pub points: u32,
}

/// Direction of an overall rank change, for the up/down arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", content = "places", rename_all = "lowercase")]
pub enum RankMovement {
    Up(u32),
    Down(u32),
    Unchanged,
}

impl RankMovement {
    /// Positive changes mean the entry climbed.
    pub fn from_change(change: i32) -> Self {
        match change {
            0 => RankMovement::Unchanged,
            c if c > 0 => RankMovement::Up(c.unsigned_abs()),
            c => RankMovement::Down(c.unsigned_abs()),
        }
    }
}
