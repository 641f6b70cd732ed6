use serde::{Deserialize, Serialize};

use crate::snapshot::{OverallContribution, SnapshotMetadata, StageContribution};
use crate::standings::{
    Medal, MedalTally, RankMovement, RiderContribution, StageHistoryEntry, ViewMode,
};

/// Query string for `GET /standings`
#[derive(Debug, Default, Deserialize)]
pub struct StandingsQuery {
    pub view: Option<String>,
    pub search: Option<String>,
    pub expanded: Option<String>,
}

/// Query string for `GET /stages/current/top-scorers`
#[derive(Debug, Default, Deserialize)]
pub struct TopScorersQuery {
    pub limit: Option<usize>,
}

/// One rendered standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsPage {
    pub view_mode: ViewMode,
    pub search_text: String,
    pub expanded: Option<String>,
    pub current_stage: u32,
    pub rows: StandingsRows,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entries", rename_all = "lowercase")]
pub enum StandingsRows {
    Individual(Vec<ParticipantRow>),
    Team(Vec<TeamRow>),
}

impl StandingsRows {
    pub fn len(&self) -> usize {
        match self {
            StandingsRows::Individual(rows) => rows.len(),
            StandingsRows::Team(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRow {
    pub participant_name: String,
    pub team_name: String,
    pub overall_rank: u32,
    pub overall_score: u32,
    pub rank_movement: RankMovement,
    pub stage_rank: u32,
    pub stage_score: u32,
    /// Podium finish in the current stage, if any
    pub stage_medal: Option<Medal>,
    /// Podium finishes across all stages
    pub medals: MedalTally,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ParticipantDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDetail {
    pub rider_contributions: Vec<RiderContribution>,
    pub history: Vec<StageHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub team_name: String,
    pub overall_rank: u32,
    pub overall_score: u32,
    pub rank_movement: RankMovement,
    pub stage_rank: u32,
    pub stage_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<TeamDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDetail {
    pub stage_contributions: Vec<StageContribution>,
    pub overall_contributions: Vec<OverallContribution>,
    pub history: Vec<StageHistoryEntry>,
}

/// Entry of the top stage scorers list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageScorer {
    pub participant_name: String,
    pub team_name: String,
    pub stage_score: u32,
    pub rider_contributions: Vec<RiderContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopScorersResponse {
    pub stage: u32,
    pub scorers: Vec<StageScorer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub metadata: SnapshotMetadata,
    pub stage_numbers: Vec<u32>,
}
