//! Notifier port
//!
//! Dispatch of a single desktop notification. Delivery is best-effort: a
//! successful return only means the platform facility accepted the request.

use async_trait::async_trait;
use happyquotes_domain::Notification;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while dispatching a notification
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to prepare notification script: {0}")]
    Script(std::io::Error),

    #[error("Notification timed out after {0:?}")]
    Timeout(Duration),
}

/// Gateway to the OS notification facility.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `notification`.
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;

    /// Backend name for log lines.
    fn name(&self) -> &'static str;
}
