use std::collections::HashMap;

use super::{
    state::ViewState,
    types::{
        ParticipantDetail, ParticipantRow, StageScorer, StandingsPage, StandingsRows, TeamDetail,
        TeamRow,
    },
};
use crate::snapshot::{ParticipantStanding, Snapshot, TeamStanding};
use crate::standings::{
    filter_by_text, sorted_rider_contributions, Medal, MedalTally, RankMovement,
    StandingsViewModel, ViewMode,
};

/// Turns a snapshot and a `ViewState` into display rows.
///
/// Ordering and filtering come from `StandingsViewModel`; this only projects
/// the results into rows and attaches the expanded row's detail.
pub struct StandingsPresenter<'a> {
    view_model: StandingsViewModel<'a>,
}

impl<'a> StandingsPresenter<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            view_model: StandingsViewModel::new(snapshot),
        }
    }

    pub fn render(&self, state: &ViewState) -> StandingsPage {
        let rows = match state.view_mode {
            ViewMode::Stage => {
                let ranking = self.view_model.stage_ranking();
                self.individual_rows(&ranking, state)
            }
            ViewMode::Overall => {
                let leaderboard: Vec<&ParticipantStanding> =
                    self.view_model.current_individual_leaderboard().iter().collect();
                self.individual_rows(&leaderboard, state)
            }
            ViewMode::Team => self.team_rows(state),
        };

        StandingsPage {
            view_mode: state.view_mode,
            search_text: state.search_text.clone(),
            expanded: state.expanded.clone(),
            current_stage: self.view_model.snapshot().metadata.current_stage,
            rows,
        }
    }

    pub fn top_stage_scorers(&self, limit: usize) -> Vec<StageScorer> {
        self.view_model
            .top_stage_scorers(limit)
            .into_iter()
            .map(|entry| StageScorer {
                participant_name: entry.participant_name.clone(),
                team_name: entry.team_name.clone(),
                stage_score: entry.stage_score,
                rider_contributions: sorted_rider_contributions(entry),
            })
            .collect()
    }

    fn individual_rows(
        &self,
        ordered: &[&ParticipantStanding],
        state: &ViewState,
    ) -> StandingsRows {
        let medals: HashMap<String, MedalTally> = self
            .view_model
            .medal_table()
            .into_iter()
            .map(|row| (row.participant_name, row.medals))
            .collect();

        let mut detail_attached = false;
        let rows = filter_by_text(ordered, &state.search_text, state.view_mode)
            .into_iter()
            .map(|entry| {
                // Only the first row with the expanded key gets detail
                let detail = (!detail_attached && state.is_expanded(&entry.participant_name))
                    .then(|| {
                        detail_attached = true;
                        self.participant_detail(entry)
                    });

                ParticipantRow {
                    participant_name: entry.participant_name.clone(),
                    team_name: entry.team_name.clone(),
                    overall_rank: entry.overall_rank,
                    overall_score: entry.overall_score,
                    rank_movement: RankMovement::from_change(entry.overall_rank_change),
                    stage_rank: entry.stage_rank,
                    stage_score: entry.stage_score,
                    stage_medal: Medal::for_rank(entry.stage_rank),
                    medals: medals
                        .get(&entry.participant_name)
                        .copied()
                        .unwrap_or_default(),
                    detail,
                }
            })
            .collect();

        StandingsRows::Individual(rows)
    }

    fn team_rows(&self, state: &ViewState) -> StandingsRows {
        let leaderboard = self.view_model.current_team_leaderboard();

        let mut detail_attached = false;
        let rows = filter_by_text(leaderboard, &state.search_text, state.view_mode)
            .into_iter()
            .map(|entry| {
                let detail = (!detail_attached && state.is_expanded(&entry.team_name)).then(|| {
                    detail_attached = true;
                    self.team_detail(&entry)
                });

                TeamRow {
                    rank_movement: RankMovement::from_change(entry.overall_rank_change),
                    overall_rank: entry.overall_rank,
                    overall_score: entry.overall_score,
                    stage_rank: entry.stage_rank,
                    stage_score: entry.stage_score,
                    team_name: entry.team_name,
                    detail,
                }
            })
            .collect();

        StandingsRows::Team(rows)
    }

    fn participant_detail(&self, entry: &ParticipantStanding) -> ParticipantDetail {
        ParticipantDetail {
            rider_contributions: sorted_rider_contributions(entry),
            history: self
                .view_model
                .participant_stage_history(&entry.participant_name),
        }
    }

    fn team_detail(&self, entry: &TeamStanding) -> TeamDetail {
        TeamDetail {
            stage_contributions: entry.stage_participant_contributions.clone(),
            overall_contributions: entry.overall_participant_contributions.clone(),
            history: self.view_model.team_stage_history(&entry.team_name),
        }
    }
}
