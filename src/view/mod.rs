// Presentation layer
//
// Holds the client's view state (active view, search text, expanded row),
// renders standings tables from the view-model and serves them over HTTP.

// Public API - what other modules can use
pub use handlers::standings_routes;
pub use presenter::StandingsPresenter;
pub use service::StandingsService;
pub use state::ViewState;
pub use types::{
    MetadataResponse, ParticipantDetail, ParticipantRow, StageScorer, StandingsPage,
    StandingsRows, TeamDetail, TeamRow, TopScorersResponse,
};

// Internal modules
mod handlers;
mod presenter;
pub mod service;
mod state;
mod types;
