//! freedesktop notifications through `notify-send`.
//!
//! Title and body are passed as separate arguments without a shell. The body
//! is interpreted as markup by most notification daemons, so `&`, `<` and
//! `>` are escaped.

use super::check_output;
use async_trait::async_trait;
use happyquotes_application::{NotificationError, Notifier};
use happyquotes_domain::Notification;
use tokio::process::Command;

const NOTIFY_SEND: &str = "notify-send";

/// Escape the characters the notification markup subset gives meaning to.
pub fn markup_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Notifier that runs `notify-send --app-name=happyquotes <title> <body>`.
#[derive(Debug, Clone)]
pub struct NotifySendNotifier {
    program: String,
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifySendNotifier {
    pub fn new() -> Self {
        Self {
            program: NOTIFY_SEND.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn args(notification: &Notification) -> Vec<String> {
        vec![
            "--app-name=happyquotes".to_string(),
            notification.title().to_string(),
            markup_escape(notification.body()),
        ]
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let output = Command::new(&self.program)
            .args(Self::args(notification))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| NotificationError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        check_output(&self.program, output)
    }

    fn name(&self) -> &'static str {
        NOTIFY_SEND
    }
}
