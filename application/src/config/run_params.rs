//! Cycle and daemon parameters

use std::time::Duration;

/// Default notification title.
pub const DEFAULT_TITLE: &str = "HappyQuotes ✨";

/// Default bound on a single notification dispatch.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time between daemon cycles (one hour).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3600);

/// Parameters for a single cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleParams {
    /// Notification title
    pub title: String,
    /// Upper bound on the notification call
    pub notify_timeout: Duration,
}

impl Default for CycleParams {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }
}

impl CycleParams {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }
}

/// Parameters for daemon mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaemonParams {
    /// Wait between the end of one cycle and the start of the next
    pub interval: Duration,
}

impl Default for DaemonParams {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}
