//! Notification configuration from TOML (`[notification]` section)

use happyquotes_application::CycleParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw notification configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    /// Notification title
    pub title: String,
    /// Seconds before a hanging notification call is abandoned
    pub timeout_secs: u64,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        let params = CycleParams::default();
        Self {
            title: params.title,
            timeout_secs: params.notify_timeout.as_secs(),
        }
    }
}

impl FileNotificationConfig {
    pub fn to_cycle_params(&self) -> CycleParams {
        CycleParams::default()
            .with_title(self.title.clone())
            .with_notify_timeout(Duration::from_secs(self.timeout_secs.max(1)))
    }
}
