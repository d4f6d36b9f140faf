//! macOS notifications through AppleScript.
//!
//! The script is written to a named temporary file and run with
//! `osascript <file>`. The file is removed when the handle drops, which
//! happens on every return path of [`AppleScriptNotifier::notify`].

use super::check_output;
use async_trait::async_trait;
use happyquotes_application::{NotificationError, Notifier};
use happyquotes_domain::Notification;
use std::io::Write;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

const OSASCRIPT: &str = "osascript";

/// Escape `s` for use inside an AppleScript double-quoted string literal.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Notifier that runs `display notification` via `osascript`.
#[derive(Debug, Clone)]
pub struct AppleScriptNotifier {
    program: String,
    temp_dir: Option<PathBuf>,
}

impl Default for AppleScriptNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AppleScriptNotifier {
    pub fn new() -> Self {
        Self {
            program: OSASCRIPT.to_string(),
            temp_dir: None,
        }
    }

    /// Use another interpreter (it receives the script path as its only argument).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Create script files in `dir` instead of the system temp directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn script(notification: &Notification) -> String {
        format!(
            "display notification \"{}\" with title \"{}\"",
            applescript_escape(notification.body()),
            applescript_escape(notification.title())
        )
    }

    fn script_file(&self) -> std::io::Result<tempfile::NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("happyquotes-").suffix(".applescript");
        match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

#[async_trait]
impl Notifier for AppleScriptNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut script = self.script_file().map_err(NotificationError::Script)?;
        script
            .write_all(Self::script(notification).as_bytes())
            .and_then(|_| script.flush())
            .map_err(NotificationError::Script)?;

        debug!("Running {} {}", self.program, script.path().display());

        let output = Command::new(&self.program)
            .arg(script.path())
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
        OSASCRIPT
    }
}
