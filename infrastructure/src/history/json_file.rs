//! History stored as a JSON array of quote texts in a single file.
//!
//! The file is read and overwritten wholesale. Reads never fail: a missing,
//! unreadable or malformed file is treated as an empty history.

use happyquotes_application::{HistoryStore, PersistenceError};
use happyquotes_domain::History;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON-file-backed history store.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> History {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No history at {}, starting fresh", self.path.display());
                return History::default();
            }
            Err(e) => {
                warn!(
                    "Could not read history {}, starting fresh: {}",
                    self.path.display(),
                    e
                );
                return History::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(history) => history,
            Err(e) => {
                warn!(
                    "Ignoring malformed history {}: {}",
                    self.path.display(),
                    e
                );
                History::default()
            }
        }
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        let json =
            serde_json::to_string(history).map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        std::fs::write(&self.path, json).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
