use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use super::{repository::SnapshotSource, Snapshot, SnapshotError};

/// Holds the snapshot currently being served.
///
/// Readers get an `Arc` and drop the lock immediately, so a reload swaps in a
/// new snapshot without touching anything a render is still reading.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<RwLock<Option<Arc<Snapshot>>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(Arc::new(snapshot)))),
        }
    }

    /// `None` until a snapshot has loaded successfully.
    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write().await = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Fetches from `source` and swaps the result in.
    ///
    /// On failure the previously loaded snapshot, if any, stays in place.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn reload(&self, source: &dyn SnapshotSource) -> Result<Arc<Snapshot>, SnapshotError> {
        match source.fetch().await {
            Ok(snapshot) => Ok(self.install(snapshot).await),
            Err(err) => {
                error!(error = %err, "Failed to load snapshot");
                Err(err)
            }
        }
    }

    /// Like `reload`, but leaves the store untouched when the fetched
    /// snapshot equals the one being served. Returns whether it was swapped.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn refresh(&self, source: &dyn SnapshotSource) -> Result<bool, SnapshotError> {
        let fetched = source.fetch().await?;

        if self.current().await.as_deref() == Some(&fetched) {
            debug!("Fetched snapshot matches the one being served");
            return Ok(false);
        }

        self.install(fetched).await;
        Ok(true)
    }

    async fn install(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = self.replace(snapshot).await;
        info!(
            current_stage = snapshot.metadata.current_stage,
            stages = snapshot.leaderboard_by_stage.len(),
            "Snapshot loaded"
        );
        snapshot
    }
}
