//! History persistence port
//!
//! The history store holds one value: the list of quote texts shown since
//! the last reset. It is read and overwritten wholesale once per cycle.
//!
//! No locking is performed. Two processes sharing a store may interleave
//! their load/save pairs and lose an update, which can surface a quote
//! earlier than expected. This is accepted for a single-user tool.

use happyquotes_domain::History;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Failure to persist the history.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Cannot write history to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot serialize history: {0}")]
    Serialize(String),
}

/// Storage for [`History`].
pub trait HistoryStore: Send + Sync {
    /// Load the persisted history.
    ///
    /// Never fails: a missing, unreadable or malformed store yields an empty
    /// history.
    fn load(&self) -> History;

    /// Overwrite the persisted history.
    fn save(&self, history: &History) -> Result<(), PersistenceError>;
}

/// Process-local history, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    history: Mutex<History>,
}

impl InMemoryHistoryStore {
    pub fn new(history: History) -> Self {
        Self {
            history: Mutex::new(history),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> History {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self) -> History {
        self.snapshot()
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        if let Ok(mut current) = self.history.lock() {
            *current = history.clone();
        }
        Ok(())
    }
}
