// Snapshot loading and storage
//
// The score job writes one JSON document with every stage's standings.
// This module turns it into validated types and keeps the current copy
// available to request handlers.

// Public API - what other modules can use
pub use errors::SnapshotError;
pub use loader::parse_snapshot;
pub use models::{
    OverallContribution, ParticipantStanding, Snapshot, SnapshotMetadata, StageContribution,
    TeamStanding,
};
pub use refresh_task::{start_refresh_task, RefreshConfig};
pub use repository::{FileSnapshotSource, InMemorySnapshotSource, SnapshotSource};
pub use stage_key::StageKey;
pub use store::SnapshotStore;

// Internal modules
mod errors;
pub mod loader;
mod models;
pub mod refresh_task;
pub mod repository;
mod stage_key;
mod store;
