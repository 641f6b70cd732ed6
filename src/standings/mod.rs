// Standings view-model
//
// Pure queries over a loaded snapshot: current leaderboards, stage ranking,
// medal tallies, stage histories and text search. Nothing here performs I/O
// or holds state between calls.

// Public API - what other modules can use
pub use models::{
    Medal, MedalTally, ParticipantMedals, RankMovement, RiderContribution, StageHistoryEntry,
};
pub use search::{filter_by_text, Searchable, ViewMode};
pub use view_model::{sorted_rider_contributions, StandingsViewModel};

// Internal modules
mod models;
mod search;
mod view_model;
