//! Quote source port
//!
//! Defines how the application obtains the quote pool.

use happyquotes_domain::QuotePool;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the quote pool.
///
/// Any of these is a configuration error: the cycle cannot proceed.
#[derive(Error, Debug)]
pub enum QuoteSourceError {
    #[error("Cannot read quote file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed quotes in {origin}: {reason}")]
    Malformed { origin: String, reason: String },
}

/// Source of the quote pool.
///
/// Implementations live in the infrastructure layer. The returned pool may
/// be empty; rejecting it is the selector's job.
pub trait QuoteSource: Send + Sync {
    /// Load the full pool.
    fn load(&self) -> Result<QuotePool, QuoteSourceError>;

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}
