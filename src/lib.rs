// Library crate for the TdF pool standings server
// This file exposes the public API for integration tests

pub mod config;
pub mod shared;
pub mod snapshot;
pub mod standings;
pub mod view;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use shared::{AppError, AppState};
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
pub use standings::{filter_by_text, StandingsViewModel, ViewMode};
pub use view::{standings_routes, StandingsPresenter, ViewState};
