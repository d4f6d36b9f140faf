//! History value object

use serde::{Deserialize, Serialize};

/// Texts of quotes shown since the last pool reset.
///
/// Stored as an ordered list (order of addition) and serialized as a plain
/// JSON array of strings, but only set membership matters for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }

    /// Append `text` unless it is already present.
    pub fn record(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !self.contains(&text) {
            self.entries.push(text);
        }
    }

    /// Discard every entry (pool-exhaustion recovery).
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for History {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}
