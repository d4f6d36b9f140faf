//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! convert into the application's run parameters.

mod daemon;
mod history;
mod logging;
mod notification;
mod quotes;

pub use daemon::FileDaemonConfig;
pub use history::FileHistoryConfig;
pub use logging::FileLoggingConfig;
pub use notification::FileNotificationConfig;
pub use quotes::FileQuotesConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quote pool source
    pub quotes: FileQuotesConfig,
    /// Shown-quote history
    pub history: FileHistoryConfig,
    /// Daemon mode settings
    pub daemon: FileDaemonConfig,
    /// Notification settings
    pub notification: FileNotificationConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quotes]
file = "/etc/happyquotes/quotes.json"

[history]
file = "/var/tmp/history.json"

[daemon]
interval_secs = 600

[notification]
title = "Daily"
timeout_secs = 3

[logging]
file = "/var/log/happyquotes.log"
level = "debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.quotes.file.as_deref(),
            Some("/etc/happyquotes/quotes.json")
        );
        assert_eq!(
            config.history.resolved_file(),
            PathBuf::from("/var/tmp/history.json")
        );
        assert_eq!(
            config.daemon.to_daemon_params().interval,
            Duration::from_secs(600)
        );
        let cycle = config.notification.to_cycle_params();
        assert_eq!(cycle.title, "Daily");
        assert_eq!(cycle.notify_timeout, Duration::from_secs(3));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.resolved_file(),
            PathBuf::from("/var/log/happyquotes.log")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[daemon]
interval_secs = 60
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.daemon.interval_secs, 60);
        // Defaults should apply
        assert!(config.quotes.file.is_none());
        assert_eq!(config.notification, FileNotificationConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let toml_str = r#"
[daemon]
interval_secs = "hourly"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_path("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/x.json"), home.join("x.json"));
            assert_eq!(expand_path("~"), home);
        }
    }
}
