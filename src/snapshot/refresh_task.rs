use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, instrument, warn};

use super::{repository::SnapshotSource, store::SnapshotStore};

/// Configuration for the snapshot refresh task
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How often to re-read the snapshot source
    pub refresh_interval: Duration,
}

/// Periodically reloads the snapshot so new score job output is picked up
/// without a restart.
#[instrument(skip(store, source))]
pub async fn start_refresh_task(
    store: SnapshotStore,
    source: Arc<dyn SnapshotSource>,
    config: RefreshConfig,
) {
    info!(
        refresh_interval_secs = config.refresh_interval.as_secs(),
        source = %source.describe(),
        "Starting snapshot refresh background task"
    );

    let mut refresh_interval = interval(config.refresh_interval);
    // The first tick completes immediately; startup has already loaded once.
    refresh_interval.tick().await;

    loop {
        refresh_interval.tick().await;

        match store.refresh(source.as_ref()).await {
            Ok(true) => info!("Snapshot refreshed with new standings"),
            Ok(false) => info!("Snapshot unchanged"),
            Err(e) => {
                warn!(error = %e, "Snapshot refresh failed, keeping previous standings");
            }
        }
    }
}
