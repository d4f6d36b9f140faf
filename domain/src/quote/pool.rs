//! Quote pool value object

use super::entities::Quote;
use crate::history::entities::History;
use std::collections::HashSet;

/// Ordered, read-only collection of quotes loaded once per cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePool {
    quotes: Vec<Quote>,
}

impl QuotePool {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes whose text is not in `history`, in pool order.
    pub fn available<'a>(&'a self, history: &History) -> Vec<&'a Quote> {
        self.quotes
            .iter()
            .filter(|q| !history.contains(q.key()))
            .collect()
    }

    /// True when every quote of a non-empty pool has already been shown.
    pub fn is_exhausted_by(&self, history: &History) -> bool {
        !self.is_empty() && self.available(history).is_empty()
    }

    /// Texts that occur more than once, in first-repeat order.
    ///
    /// Duplicates share one history entry, so they behave as a single quote.
    pub fn duplicate_texts(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for quote in &self.quotes {
            if !seen.insert(quote.key()) && reported.insert(quote.key()) {
                duplicates.push(quote.key());
            }
        }
        duplicates
    }
}

impl From<Vec<Quote>> for QuotePool {
    fn from(quotes: Vec<Quote>) -> Self {
        Self::new(quotes)
    }
}
