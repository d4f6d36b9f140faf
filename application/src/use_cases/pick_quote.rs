//! Pick Quote use case.
//!
//! The selector: chooses one quote the user has not seen since the last
//! reset and records it in the history store.

use crate::ports::history_store::{HistoryStore, PersistenceError};
use happyquotes_domain::{DomainError, Quote, QuotePool};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::debug;

/// Result of a successful pick.
#[derive(Debug)]
pub struct PickedQuote {
    /// The chosen quote
    pub quote: Quote,
    /// Whether the pool was exhausted and the history discarded first
    pub history_reset: bool,
    /// Set when the updated history could not be saved. The pick stands.
    pub persistence_error: Option<PersistenceError>,
}

/// Use case for choosing the next quote.
///
/// 1. Load the history
/// 2. Keep the quotes whose text is not in it
/// 3. If none remain, discard the history and use the whole pool
/// 4. Choose uniformly at random
/// 5. Record the choice and save the history
#[derive(Clone)]
pub struct PickQuoteUseCase {
    history: Arc<dyn HistoryStore>,
}

impl PickQuoteUseCase {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    pub fn execute(&self, pool: &QuotePool) -> Result<PickedQuote, DomainError> {
        self.execute_with_rng(pool, &mut rand::thread_rng())
    }

    pub fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        pool: &QuotePool,
        rng: &mut R,
    ) -> Result<PickedQuote, DomainError> {
        if pool.is_empty() {
            return Err(DomainError::EmptyPool);
        }

        let mut history = self.history.load();
        let mut available = pool.available(&history);
        let history_reset = available.is_empty();
        if history_reset {
            history.reset();
            available = pool.quotes().iter().collect();
        }

        debug!(
            "Selecting from {} of {} quotes",
            available.len(),
            pool.len()
        );

        let quote = available
            .choose(rng)
            .map(|q| (*q).clone())
            .ok_or(DomainError::EmptyPool)?;

        history.record(quote.key());
        let persistence_error = self.history.save(&history).err();

        Ok(PickedQuote {
            quote,
            history_reset,
            persistence_error,
        })
    }
}
