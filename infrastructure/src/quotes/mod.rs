//! Quote pool adapters implementing
//! [`QuoteSource`](happyquotes_application::QuoteSource).

mod embedded;
mod json_file;

pub use embedded::EmbeddedQuoteSource;
pub use json_file::JsonFileQuoteSource;

use happyquotes_application::QuoteSource;
use happyquotes_domain::{Quote, QuotePool};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// The configured quote file, or the built-in pool when none is set.
pub fn quote_source_for(file: Option<PathBuf>) -> Arc<dyn QuoteSource> {
    match file {
        Some(path) => Arc::new(JsonFileQuoteSource::new(path)),
        None => Arc::new(EmbeddedQuoteSource),
    }
}

fn into_pool(quotes: Vec<Quote>, origin: &str) -> QuotePool {
    let pool = QuotePool::new(quotes);
    for text in pool.duplicate_texts() {
        warn!("Duplicate quote in {}: \"{}\"", origin, text);
    }
    pool
}
