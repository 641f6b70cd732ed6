use std::collections::{HashMap, HashSet};

use super::models::{
    Medal, MedalTally, ParticipantMedals, RiderContribution, StageHistoryEntry,
};
use crate::snapshot::{ParticipantStanding, Snapshot, TeamStanding};

/// Read-only queries over one snapshot.
///
/// Every method is a pure function of the snapshot and its arguments. Missing
/// stages or names give empty results rather than errors. When a name occurs
/// more than once in a stage, the first entry in list order wins.
#[derive(Debug, Clone, Copy)]
pub struct StandingsViewModel<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> StandingsViewModel<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    /// Current stage's individual leaderboard in supplied (overall rank) order.
    pub fn current_individual_leaderboard(&self) -> &'a [ParticipantStanding] {
        self.snapshot
            .current_stage_key()
            .and_then(|key| self.snapshot.leaderboard_by_stage.get(&key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn current_team_leaderboard(&self) -> &'a [TeamStanding] {
        self.snapshot
            .current_stage_key()
            .and_then(|key| self.snapshot.team_leaderboard_by_stage.get(&key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Current individual leaderboard ordered by stage rank.
    ///
    /// The sort is stable, so entries sharing a stage rank keep their
    /// leaderboard order.
    pub fn stage_ranking(&self) -> Vec<&'a ParticipantStanding> {
        let mut ranking: Vec<&ParticipantStanding> =
            self.current_individual_leaderboard().iter().collect();
        ranking.sort_by_key(|entry| entry.stage_rank);
        ranking
    }

    /// Highest stage scores of the current stage, at most `limit` entries.
    pub fn top_stage_scorers(&self, limit: usize) -> Vec<&'a ParticipantStanding> {
        let mut scorers: Vec<&ParticipantStanding> =
            self.current_individual_leaderboard().iter().collect();
        scorers.sort_by(|a, b| b.stage_score.cmp(&a.stage_score));
        scorers.truncate(limit);
        scorers
    }

    /// Stage numbers with an individual leaderboard, ascending.
    pub fn stage_numbers(&self) -> Vec<u32> {
        self.snapshot.stage_keys().map(|key| key.number()).collect()
    }

    pub fn participant_stage_history(&self, participant_name: &str) -> Vec<StageHistoryEntry> {
        let mut history: Vec<StageHistoryEntry> = self
            .snapshot
            .leaderboard_by_stage
            .iter()
            .filter_map(|(key, entries)| {
                entries
                    .iter()
                    .find(|entry| entry.participant_name == participant_name)
                    .map(|entry| StageHistoryEntry {
                        stage_number: key.number(),
                        stage_score: entry.stage_score,
                        stage_rank: entry.stage_rank,
                    })
            })
            .collect();
        history.sort_by_key(|entry| entry.stage_number);
        history
    }

    pub fn team_stage_history(&self, team_name: &str) -> Vec<StageHistoryEntry> {
        let mut history: Vec<StageHistoryEntry> = self
            .snapshot
            .team_leaderboard_by_stage
            .iter()
            .filter_map(|(key, entries)| {
                entries
                    .iter()
                    .find(|entry| entry.team_name == team_name)
                    .map(|entry| StageHistoryEntry {
                        stage_number: key.number(),
                        stage_score: entry.stage_score,
                        stage_rank: entry.stage_rank,
                    })
            })
            .collect();
        history.sort_by_key(|entry| entry.stage_number);
        history
    }

    /// Counts the stages where the participant finished first, second or third.
    pub fn participant_medal_tally(&self, participant_name: &str) -> MedalTally {
        self.participant_stage_history(participant_name)
            .iter()
            .filter_map(|entry| Medal::for_rank(entry.stage_rank))
            .fold(MedalTally::default(), |mut tally, medal| {
                tally.award(medal);
                tally
            })
    }

    /// Medal tallies for everyone on the current leaderboard, in leaderboard order.
    pub fn medal_table(&self) -> Vec<ParticipantMedals> {
        let mut tallies: HashMap<&str, MedalTally> = HashMap::new();

        for entries in self.snapshot.leaderboard_by_stage.values() {
            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.participant_name.as_str()) {
                    continue;
                }
                if let Some(medal) = Medal::for_rank(entry.stage_rank) {
                    tallies
                        .entry(entry.participant_name.as_str())
                        .or_default()
                        .award(medal);
                }
            }
        }

        let mut listed = HashSet::new();
        self.current_individual_leaderboard()
            .iter()
            .filter(|entry| listed.insert(entry.participant_name.as_str()))
            .map(|entry| ParticipantMedals {
                participant_name: entry.participant_name.clone(),
                medals: tallies
                    .get(entry.participant_name.as_str())
                    .copied()
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// Rider points for one stage, highest first.
///
/// Riders on equal points are ordered by name so the result does not depend
/// on how the source document happened to list them.
pub fn sorted_rider_contributions(entry: &ParticipantStanding) -> Vec<RiderContribution> {
    let mut contributions: Vec<RiderContribution> = entry
        .stage_rider_contributions
        .iter()
        .map(|(rider, points)| RiderContribution {
            rider: rider.clone(),
            points: *points,
        })
        .collect();
    contributions.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.rider.cmp(&b.rider)));
    contributions
}
