//! Logging configuration from TOML (`[logging]` section)

use super::expand_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "happyquotes.log";

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file path (platform log directory when unset)
    pub file: Option<String>,
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl FileLoggingConfig {
    /// `~/Library/Logs/happyquotes.log` on macOS, the local data directory
    /// elsewhere.
    pub fn resolved_file(&self) -> PathBuf {
        if let Some(raw) = &self.file {
            return expand_path(raw);
        }
        if cfg!(target_os = "macos")
            && let Some(home) = dirs::home_dir()
        {
            return home.join("Library").join("Logs").join(LOG_FILE_NAME);
        }
        dirs::data_local_dir()
            .map(|d| d.join("happyquotes").join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_name() {
        let path = FileLoggingConfig::default().resolved_file();
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
