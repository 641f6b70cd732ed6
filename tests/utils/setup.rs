use axum::Router;
use std::sync::Arc;

use tdf_pool::{
    shared::AppState,
    snapshot::{FileSnapshotSource, InMemorySnapshotSource, Snapshot, SnapshotSource, SnapshotStore},
    view::standings_routes,
};

pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tdf_data.json");

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: SnapshotStore,
    pub source: Arc<dyn SnapshotSource>,
}

impl TestSetup {
    /// Fresh router over the shared store
    pub fn app(&self) -> Router {
        standings_routes().with_state(AppState::new(self.store.clone()))
    }

    pub async fn load(&self) -> Arc<Snapshot> {
        self.store
            .reload(self.source.as_ref())
            .await
            .expect("test snapshot should load")
    }
}

pub struct TestSetupBuilder {
    source: Arc<dyn SnapshotSource>,
    preload: bool,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            source: Arc::new(FileSnapshotSource::new(FIXTURE_PATH)),
            preload: true,
        }
    }

    pub fn with_snapshot(mut self, snapshot: &Snapshot) -> Self {
        self.source = Arc::new(
            InMemorySnapshotSource::from_snapshot(snapshot).expect("snapshot should serialize"),
        );
        self
    }

    /// Leave the store empty, as if the startup load failed
    pub fn without_preload(mut self) -> Self {
        self.preload = false;
        self
    }

    pub async fn build(self) -> TestSetup {
        let setup = TestSetup {
            store: SnapshotStore::new(),
            source: self.source,
        };
        if self.preload {
            setup.load().await;
        }
        setup
    }
}
