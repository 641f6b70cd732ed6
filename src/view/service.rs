use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{
    presenter::StandingsPresenter,
    state::ViewState,
    types::{MetadataResponse, StandingsPage, TopScorersResponse},
};
use crate::shared::AppError;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::standings::{MedalTally, ParticipantMedals, StageHistoryEntry, StandingsViewModel};

/// Default length of the top stage scorers list
pub const DEFAULT_TOP_SCORERS: usize = 5;

/// Service answering standings queries against the current snapshot
pub struct StandingsService {
    store: SnapshotStore,
}

impl StandingsService {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Renders one standings table for the given view state
    #[instrument(skip(self))]
    pub async fn standings_page(&self, state: &ViewState) -> Result<StandingsPage, AppError> {
        let snapshot = self.snapshot().await?;
        let page = StandingsPresenter::new(&snapshot).render(state);

        debug!(
            view_mode = %page.view_mode,
            row_count = page.rows.len(),
            "Rendered standings page"
        );

        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn participant_history(
        &self,
        participant_name: &str,
    ) -> Result<Vec<StageHistoryEntry>, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(StandingsViewModel::new(&snapshot).participant_stage_history(participant_name))
    }

    #[instrument(skip(self))]
    pub async fn participant_medals(&self, participant_name: &str) -> Result<MedalTally, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(StandingsViewModel::new(&snapshot).participant_medal_tally(participant_name))
    }

    #[instrument(skip(self))]
    pub async fn team_history(&self, team_name: &str) -> Result<Vec<StageHistoryEntry>, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(StandingsViewModel::new(&snapshot).team_stage_history(team_name))
    }

    #[instrument(skip(self))]
    pub async fn medal_table(&self) -> Result<Vec<ParticipantMedals>, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(StandingsViewModel::new(&snapshot).medal_table())
    }

    #[instrument(skip(self))]
    pub async fn top_stage_scorers(&self, limit: usize) -> Result<TopScorersResponse, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(TopScorersResponse {
            stage: snapshot.metadata.current_stage,
            scorers: StandingsPresenter::new(&snapshot).top_stage_scorers(limit),
        })
    }

    #[instrument(skip(self))]
    pub async fn metadata(&self) -> Result<MetadataResponse, AppError> {
        let snapshot = self.snapshot().await?;
        Ok(MetadataResponse {
            metadata: snapshot.metadata.clone(),
            stage_numbers: StandingsViewModel::new(&snapshot).stage_numbers(),
        })
    }

    async fn snapshot(&self) -> Result<Arc<Snapshot>, AppError> {
        self.store.current().await.ok_or_else(|| {
            warn!("Standings requested before a snapshot was loaded");
            AppError::DataUnavailable
        })
    }
}
