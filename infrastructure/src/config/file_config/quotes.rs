//! Quote source configuration from TOML (`[quotes]` section)

use super::expand_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw quote source configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuotesConfig {
    /// JSON quote file. The built-in pool is used when unset.
    pub file: Option<String>,
}

impl FileQuotesConfig {
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.as_deref().map(expand_path)
    }
}
