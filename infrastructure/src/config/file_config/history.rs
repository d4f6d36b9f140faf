//! History configuration from TOML (`[history]` section)

use super::expand_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// History file name used when no path is configured, relative to home.
const DEFAULT_HISTORY_FILE: &str = ".happyquotes_history";

/// Raw history configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// History file path (defaults to `~/.happyquotes_history`)
    pub file: Option<String>,
}

impl FileHistoryConfig {
    pub fn resolved_file(&self) -> PathBuf {
        match &self.file {
            Some(raw) => expand_path(raw),
            None => dirs::home_dir()
                .unwrap_or_default()
                .join(DEFAULT_HISTORY_FILE),
        }
    }
}
