use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use super::{loader::parse_snapshot, Snapshot, SnapshotError};

/// Where snapshots come from.
///
/// Implementations return a freshly parsed and validated snapshot on every
/// call; callers decide whether to keep it.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Reads the snapshot JSON file written by the score job.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        debug!(bytes = contents.len(), "Read snapshot file");
        parse_snapshot(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a fixed document. Useful for tests and demos.
#[derive(Debug, Clone)]
pub struct InMemorySnapshotSource {
    json: String,
}

impl InMemorySnapshotSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Ok(Self::new(serde_json::to_string(snapshot)?))
    }
}

#[async_trait]
impl SnapshotSource for InMemorySnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        parse_snapshot(&self.json)
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
