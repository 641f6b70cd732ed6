use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid stage key `{0}`, expected `stage_<N>` with N >= 1")]
    InvalidStageKey(String),

    #[error("Snapshot validation failed: {0}")]
    Validation(String),
}
