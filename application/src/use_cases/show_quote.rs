//! Show Quote use case.
//!
//! One cycle: load the pool, pick a quote, dispatch the notification.
//! Single-shot mode runs this once; the daemon runs it on every tick.

use crate::config::CycleParams;
use crate::ports::history_store::HistoryStore;
use crate::ports::notifier::{NotificationError, Notifier};
use crate::ports::quote_source::{QuoteSource, QuoteSourceError};
use crate::use_cases::pick_quote::PickQuoteUseCase;
use happyquotes_domain::{DomainError, Notification, Quote};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that end a cycle without a notification being shown.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] QuoteSourceError),

    #[error("Selection error: {0}")]
    Selection(#[from] DomainError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),
}

/// What a completed cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    pub quote: Quote,
    pub history_reset: bool,
    /// False when the history write failed; the next run may repeat a quote
    pub history_saved: bool,
}

/// Use case for a single selection + notification cycle.
#[derive(Clone)]
pub struct ShowQuoteUseCase {
    quote_source: Arc<dyn QuoteSource>,
    picker: PickQuoteUseCase,
    notifier: Arc<dyn Notifier>,
    params: CycleParams,
}

impl ShowQuoteUseCase {
    pub fn new(
        quote_source: Arc<dyn QuoteSource>,
        history: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            quote_source,
            picker: PickQuoteUseCase::new(history),
            notifier,
            params: CycleParams::default(),
        }
    }

    pub fn with_params(mut self, params: CycleParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &CycleParams {
        &self.params
    }

    pub async fn execute(&self) -> Result<CycleOutcome, CycleError> {
        let pool = self.quote_source.load()?;
        let picked = self.picker.execute(&pool)?;

        if picked.history_reset {
            info!(
                "All {} quotes have been shown, starting a new round",
                pool.len()
            );
        }
        if let Some(e) = &picked.persistence_error {
            warn!("Quote history not saved, the next run may repeat a quote: {}", e);
        }

        info!("Showing quote: {}", picked.quote);

        let notification = Notification::for_quote(self.params.title.clone(), &picked.quote);
        let timeout = self.params.notify_timeout;
        match tokio::time::timeout(timeout, self.notifier.notify(&notification)).await {
            Ok(result) => result?,
            Err(_) => return Err(NotificationError::Timeout(timeout).into()),
        }

        Ok(CycleOutcome {
            quote: picked.quote,
            history_reset: picked.history_reset,
            history_saved: picked.persistence_error.is_none(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::history_store::InMemoryHistoryStore;
    use crate::use_cases::test_support::{
        BrokenQuoteSource, FailingHistoryStore, HangingNotifier, RecordingNotifier,
        StaticQuoteSource,
    };
    use happyquotes_domain::MAX_BODY_CHARS;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cycle_notifies_chosen_quote() {
        let notifier = Arc::new(RecordingNotifier::default());
        let history = Arc::new(InMemoryHistoryStore::default());
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource::hello_world()),
            history.clone(),
            notifier.clone(),
        )
        .with_params(CycleParams::default().with_title("Test"));

        let outcome = use_case.execute().await.unwrap();
        assert!(outcome.history_saved);
        assert!(!outcome.history_reset);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title(), "Test");
        assert_eq!(sent[0].body(), outcome.quote.to_string());
        assert_eq!(history.snapshot().entries(), &[outcome.quote.text]);
    }

    #[tokio::test]
    async fn test_long_quote_is_truncated_before_dispatch() {
        let long = "a".repeat(400);
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource(vec![Quote::new(long.clone(), "Author")])),
            Arc::new(InMemoryHistoryStore::default()),
            notifier.clone(),
        );

        use_case.execute().await.unwrap();

        let body = notifier.sent()[0].body().to_string();
        assert_eq!(body.chars().count(), MAX_BODY_CHARS);
        assert!(body.ends_with('…'));
        assert!(!body.contains(&long));
    }

    #[tokio::test]
    async fn test_bad_quote_source_is_configuration_error() {
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = ShowQuoteUseCase::new(
            Arc::new(BrokenQuoteSource),
            Arc::new(InMemoryHistoryStore::default()),
            notifier.clone(),
        );

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, CycleError::Configuration(_)));
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_pool_is_selection_error() {
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource(Vec::new())),
            Arc::new(InMemoryHistoryStore::default()),
            Arc::new(RecordingNotifier::default()),
        );

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, CycleError::Selection(DomainError::EmptyPool)));
    }

    #[tokio::test]
    async fn test_history_write_failure_still_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource::hello_world()),
            Arc::new(FailingHistoryStore),
            notifier.clone(),
        );

        let outcome = use_case.execute().await.unwrap();
        assert!(!outcome.history_saved);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_notifier_failure_is_reported() {
        let history = Arc::new(InMemoryHistoryStore::default());
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource::hello_world()),
            history.clone(),
            Arc::new(RecordingNotifier::default().failing_first(1)),
        );

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, CycleError::Notification(_)));
        // The pick was recorded before dispatch
        assert_eq!(history.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_hanging_notifier_times_out() {
        let use_case = ShowQuoteUseCase::new(
            Arc::new(StaticQuoteSource::hello_world()),
            Arc::new(InMemoryHistoryStore::default()),
            Arc::new(HangingNotifier),
        )
        .with_params(CycleParams::default().with_notify_timeout(Duration::from_millis(20)));

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(
            err,
            CycleError::Notification(NotificationError::Timeout(_))
        ));
    }
}
