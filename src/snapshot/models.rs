use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::StageKey;

/// Point-in-time standings document written by the score job.
///
/// Loaded once and never mutated; a newer file replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub metadata: SnapshotMetadata,
    #[serde(default)]
    pub leaderboard_by_stage: BTreeMap<StageKey, Vec<ParticipantStanding>>,
    #[serde(default, alias = "directie_leaderboard_by_stage")]
    pub team_leaderboard_by_stage: BTreeMap<StageKey, Vec<TeamStanding>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub current_stage: u32,
    pub top_n_participants_for_directie: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdf_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stages_processed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStanding {
    pub participant_name: String,
    #[serde(alias = "directie_name")]
    pub team_name: String,
    pub overall_score: u32,
    pub overall_rank: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub overall_rank_change: i32,
    pub stage_score: u32,
    pub stage_rank: u32,
    /// Rider name to points. Keys iterate in ascending name order.
    #[serde(default)]
    pub stage_rider_contributions: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    #[serde(alias = "directie_name")]
    pub team_name: String,
    pub overall_score: u32,
    pub overall_rank: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub overall_rank_change: i32,
    pub stage_score: u32,
    pub stage_rank: u32,
    #[serde(default)]
    pub stage_participant_contributions: Vec<StageContribution>,
    /// Top contributors, descending by overall score.
    #[serde(default)]
    pub overall_participant_contributions: Vec<OverallContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageContribution {
    pub participant_name: String,
    pub stage_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallContribution {
    pub participant_name: String,
    pub overall_score: u32,
}

impl Snapshot {
    pub fn current_stage_key(&self) -> Option<StageKey> {
        StageKey::new(self.metadata.current_stage)
    }

    /// Stage keys present in the individual leaderboards, ascending.
    pub fn stage_keys(&self) -> impl Iterator<Item = StageKey> + '_ {
        self.leaderboard_by_stage.keys().copied()
    }
}

/// The score job writes `null` for participants without a previous rank.
fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}
