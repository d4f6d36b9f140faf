//! Quote entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quotation.
///
/// Identity for history purposes is [`Quote::text`]; two quotes with the
/// same text are indistinguishable to the selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quotation itself (accepts `q` in source files)
    #[serde(alias = "q")]
    pub text: String,
    /// Who said it (accepts `a` in source files)
    #[serde(alias = "a", default)]
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Key used for history membership.
    pub fn key(&self) -> &str {
        &self.text
    }
}

/// Renders the notification body form: `"text" — author`.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.author.trim().is_empty() {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "\"{}\" — {}", self.text, self.author)
        }
    }
}
