//! Daemon configuration from TOML (`[daemon]` section)

use happyquotes_application::DaemonParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Raw daemon configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDaemonConfig {
    /// Seconds between notifications
    pub interval_secs: u64,
}

impl Default for FileDaemonConfig {
    fn default() -> Self {
        Self {
            interval_secs: DaemonParams::default().interval.as_secs(),
        }
    }
}

impl FileDaemonConfig {
    /// Convert to [`DaemonParams`]. A zero interval falls back to the default.
    pub fn to_daemon_params(&self) -> DaemonParams {
        if self.interval_secs == 0 {
            warn!("daemon.interval_secs must be positive, using the default");
            return DaemonParams::default();
        }
        DaemonParams {
            interval: Duration::from_secs(self.interval_secs),
        }
    }
}
