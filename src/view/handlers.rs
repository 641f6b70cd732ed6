use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use super::{
    service::{StandingsService, DEFAULT_TOP_SCORERS},
    state::ViewState,
    types::{MetadataResponse, StandingsPage, StandingsQuery, TopScorersQuery, TopScorersResponse},
};
use crate::shared::{AppError, AppState};
use crate::standings::{MedalTally, ParticipantMedals, StageHistoryEntry, ViewMode};

/// All standings routes, ready to be given an `AppState`
pub fn standings_routes() -> Router<AppState> {
    Router::new()
        .route("/standings", get(get_standings))
        .route("/participants/:name/history", get(get_participant_history))
        .route("/participants/:name/medals", get(get_participant_medals))
        .route("/teams/:name/history", get(get_team_history))
        .route("/stages/current/top-scorers", get(get_top_scorers))
        .route("/medals", get(get_medal_table))
        .route("/metadata", get(get_metadata))
}

/// HTTP handler for one standings table
///
/// GET /standings?view=stage|overall|team&search=..&expanded=..
#[instrument(name = "get_standings", skip(state))]
pub async fn get_standings(
    State(state): State<AppState>,
    Query(query): Query<StandingsQuery>,
) -> Result<Json<StandingsPage>, AppError> {
    let view_state = view_state_from_query(query)?;

    let service = StandingsService::new(state.snapshot_store.clone());
    let page = service.standings_page(&view_state).await?;

    info!(
        view_mode = %page.view_mode,
        row_count = page.rows.len(),
        "Standings rendered"
    );

    Ok(Json(page))
}

/// GET /participants/:name/history
#[instrument(name = "get_participant_history", skip(state))]
pub async fn get_participant_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StageHistoryEntry>>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    Ok(Json(service.participant_history(&name).await?))
}

/// GET /participants/:name/medals
#[instrument(name = "get_participant_medals", skip(state))]
pub async fn get_participant_medals(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MedalTally>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    Ok(Json(service.participant_medals(&name).await?))
}

/// GET /teams/:name/history
#[instrument(name = "get_team_history", skip(state))]
pub async fn get_team_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StageHistoryEntry>>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    Ok(Json(service.team_history(&name).await?))
}

/// GET /stages/current/top-scorers?limit=N
#[instrument(name = "get_top_scorers", skip(state))]
pub async fn get_top_scorers(
    State(state): State<AppState>,
    Query(query): Query<TopScorersQuery>,
) -> Result<Json<TopScorersResponse>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    let limit = query.limit.unwrap_or(DEFAULT_TOP_SCORERS);
    Ok(Json(service.top_stage_scorers(limit).await?))
}

/// GET /medals
#[instrument(name = "get_medal_table", skip(state))]
pub async fn get_medal_table(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantMedals>>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    Ok(Json(service.medal_table().await?))
}

/// GET /metadata
#[instrument(name = "get_metadata", skip(state))]
pub async fn get_metadata(
    State(state): State<AppState>,
) -> Result<Json<MetadataResponse>, AppError> {
    let service = StandingsService::new(state.snapshot_store.clone());
    Ok(Json(service.metadata().await?))
}

/// Rebuilds the client's view state from the query string.
fn view_state_from_query(query: StandingsQuery) -> Result<ViewState, AppError> {
    let view_mode = match query.view.as_deref() {
        None | Some("") => ViewMode::default(),
        Some(raw) => raw.parse::<ViewMode>().map_err(|_| {
            let known: Vec<String> = ViewMode::iter().map(|m| m.to_string()).collect();
            AppError::BadRequest(format!(
                "Unknown view `{}`, expected one of: {}",
                raw,
                known.join(", ")
            ))
        })?,
    };

    let mut view_state = ViewState::new(view_mode).set_search_text(query.search.unwrap_or_default());
    if let Some(key) = query.expanded.filter(|k| !k.is_empty()) {
        view_state = view_state.toggle_expanded(&key);
    }

    Ok(view_state)
}
