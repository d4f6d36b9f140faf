//! Desktop notification backends implementing
//! [`Notifier`](happyquotes_application::Notifier).
//!
//! - [`AppleScriptNotifier`]: macOS, `osascript` running a temporary script
//! - [`NotifySendNotifier`]: freedesktop `notify-send`

mod applescript;
mod notify_send;

pub use applescript::{AppleScriptNotifier, applescript_escape};
pub use notify_send::{NotifySendNotifier, markup_escape};

use happyquotes_application::{NotificationError, Notifier};
use std::process::Output;
use std::sync::Arc;

/// The notifier for the platform this binary was built for.
pub fn platform_notifier() -> Arc<dyn Notifier> {
    if cfg!(target_os = "macos") {
        Arc::new(AppleScriptNotifier::new())
    } else {
        Arc::new(NotifySendNotifier::new())
    }
}

/// Map a finished child process to the notifier result.
fn check_output(program: &str, output: Output) -> Result<(), NotificationError> {
    if output.status.success() {
        return Ok(());
    }
    Err(NotificationError::Failed {
        program: program.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
