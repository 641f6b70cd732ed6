pub mod actions;
pub mod setup;
pub mod snapshot_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::RouterExt;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder, FIXTURE_PATH};
pub use snapshot_builders::SnapshotBuilder;
