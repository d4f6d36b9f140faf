//! Built-in quote pool compiled into the binary.

use super::into_pool;
use happyquotes_application::{QuoteSource, QuoteSourceError};
use happyquotes_domain::{Quote, QuotePool};

const EMBEDDED_QUOTES: &str = include_str!("../../assets/quotes.json");

/// Quote source backed by the bundled `quotes.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedQuoteSource;

impl QuoteSource for EmbeddedQuoteSource {
    fn load(&self) -> Result<QuotePool, QuoteSourceError> {
        let quotes: Vec<Quote> =
            serde_json::from_str(EMBEDDED_QUOTES).map_err(|e| QuoteSourceError::Malformed {
                origin: self.describe(),
                reason: e.to_string(),
            })?;
        Ok(into_pool(quotes, &self.describe()))
    }

    fn describe(&self) -> String {
        "built-in quotes".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_pool_is_valid() {
        let pool = EmbeddedQuoteSource.load().unwrap();
        assert!(pool.len() >= 10);
        assert!(pool.duplicate_texts().is_empty());
        assert!(pool.quotes().iter().all(|q| !q.text.is_empty() && !q.author.is_empty()));
    }
}
