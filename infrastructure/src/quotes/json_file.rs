//! JSON quote file reader.
//!
//! The file holds an array of `{"text": ..., "author": ...}` objects; the
//! short keys `q` and `a` are accepted as well.

use super::into_pool;
use happyquotes_application::{QuoteSource, QuoteSourceError};
use happyquotes_domain::{Quote, QuotePool};
use std::path::{Path, PathBuf};

/// Quote source reading a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileQuoteSource {
    path: PathBuf,
}

impl JsonFileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteSource for JsonFileQuoteSource {
    fn load(&self) -> Result<QuotePool, QuoteSourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| QuoteSourceError::Read {
                path: self.path.clone(),
                source,
            })?;

        let quotes: Vec<Quote> =
            serde_json::from_str(&content).map_err(|e| QuoteSourceError::Malformed {
                origin: self.describe(),
                reason: e.to_string(),
            })?;

        Ok(into_pool(quotes, &self.describe()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
