use std::collections::BTreeMap;

use tdf_pool::snapshot::{
    OverallContribution, ParticipantStanding, Snapshot, SnapshotMetadata, StageKey, TeamStanding,
};

// ============================================================================
// Snapshot Setup Utilities
// ============================================================================

/// (participant, team, stage_rank, stage_score)
pub type StageRow<'a> = (&'a str, &'a str, u32, u32);

pub struct SnapshotBuilder {
    current_stage: u32,
    stages: BTreeMap<u32, Vec<ParticipantStanding>>,
    teams: BTreeMap<u32, Vec<TeamStanding>>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            current_stage: 1,
            stages: BTreeMap::new(),
            teams: BTreeMap::new(),
        }
    }

    pub fn with_current_stage(mut self, stage: u32) -> Self {
        self.current_stage = stage;
        self
    }

    /// Rows are listed in overall order; overall rank follows list position.
    pub fn with_stage(mut self, stage: u32, rows: &[StageRow]) -> Self {
        let entries = rows
            .iter()
            .enumerate()
            .map(|(index, (name, team, stage_rank, stage_score))| ParticipantStanding {
                participant_name: name.to_string(),
                team_name: team.to_string(),
                overall_score: *stage_score,
                overall_rank: index as u32 + 1,
                overall_rank_change: 0,
                stage_score: *stage_score,
                stage_rank: *stage_rank,
                stage_rider_contributions: BTreeMap::new(),
            })
            .collect();
        self.stages.insert(stage, entries);
        self
    }

    /// Teams in overall order with the participants that contribute to them.
    pub fn with_team_stage(mut self, stage: u32, teams: &[(&str, &[&str])]) -> Self {
        let entries = teams
            .iter()
            .enumerate()
            .map(|(index, (team, members))| TeamStanding {
                team_name: team.to_string(),
                overall_score: 0,
                overall_rank: index as u32 + 1,
                overall_rank_change: 0,
                stage_score: 0,
                stage_rank: index as u32 + 1,
                stage_participant_contributions: vec![],
                overall_participant_contributions: members
                    .iter()
                    .map(|member| OverallContribution {
                        participant_name: member.to_string(),
                        overall_score: 0,
                    })
                    .collect(),
            })
            .collect();
        self.teams.insert(stage, entries);
        self
    }

    pub fn build(self) -> Snapshot {
        Snapshot {
            metadata: SnapshotMetadata {
                current_stage: self.current_stage,
                top_n_participants_for_directie: 5,
                last_updated: None,
                tdf_year: None,
                total_stages_processed: Some(self.stages.len() as u32),
            },
            leaderboard_by_stage: self
                .stages
                .into_iter()
                .map(|(n, entries)| (stage_key(n), entries))
                .collect(),
            team_leaderboard_by_stage: self
                .teams
                .into_iter()
                .map(|(n, entries)| (stage_key(n), entries))
                .collect(),
        }
    }
}

fn stage_key(stage: u32) -> StageKey {
    StageKey::new(stage).expect("stage numbers in tests start at 1")
}
