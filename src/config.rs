use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SNAPSHOT_PATH: &str = "data/tdf_data.json";

/// Server configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub snapshot_path: PathBuf,
    /// `None` loads the snapshot once at startup and never again
    pub refresh_interval: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            refresh_interval: None,
        }
    }
}

impl ServerConfig {
    /// Reads `TDF_BIND_ADDR`, `TDF_SNAPSHOT_PATH` and `TDF_REFRESH_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("TDF_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_BIND_ADDR, "Invalid TDF_BIND_ADDR, using default");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let snapshot_path = lookup("TDF_SNAPSHOT_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_path);

        // 0 disables refreshing, same as leaving it unset
        let refresh_interval = lookup("TDF_REFRESH_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            bind_addr,
            snapshot_path,
            refresh_interval,
        }
    }
}
