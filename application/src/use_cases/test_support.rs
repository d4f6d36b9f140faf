//! Port doubles shared by the use case tests.

use crate::ports::history_store::{HistoryStore, PersistenceError};
use crate::ports::notifier::{NotificationError, Notifier};
use crate::ports::quote_source::{QuoteSource, QuoteSourceError};
use async_trait::async_trait;
use happyquotes_domain::{History, Notification, Quote, QuotePool};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub(crate) struct StaticQuoteSource(pub Vec<Quote>);

impl StaticQuoteSource {
    pub(crate) fn hello_world() -> Self {
        Self(vec![Quote::new("hello", "A"), Quote::new("world", "B")])
    }
}

impl QuoteSource for StaticQuoteSource {
    fn load(&self) -> Result<QuotePool, QuoteSourceError> {
        Ok(QuotePool::new(self.0.clone()))
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

pub(crate) struct BrokenQuoteSource;

impl QuoteSource for BrokenQuoteSource {
    fn load(&self) -> Result<QuotePool, QuoteSourceError> {
        Err(QuoteSourceError::Malformed {
            origin: "broken".to_string(),
            reason: "expected an array".to_string(),
        })
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

pub(crate) struct FailingHistoryStore;

impl HistoryStore for FailingHistoryStore {
    fn load(&self) -> History {
        History::default()
    }

    fn save(&self, _history: &History) -> Result<(), PersistenceError> {
        Err(PersistenceError::Write {
            path: "/read-only/history".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

/// Records every notification. Optionally fails the first `fail_first`
/// calls and cancels `cancel_on` once `cancel_after` calls have been seen.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    calls: AtomicUsize,
    fail_first: usize,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl RecordingNotifier {
    pub(crate) fn failing_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub(crate) fn cancel_after(mut self, n: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((n, token));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((n, token)) = &self.cancel_after
            && call >= *n
        {
            token.cancel();
        }
        if call <= self.fail_first {
            return Err(NotificationError::Failed {
                program: "mock".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "boom".to_string(),
            });
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub(crate) struct HangingNotifier;

#[async_trait]
impl Notifier for HangingNotifier {
    async fn notify(&self, _notification: &Notification) -> Result<(), NotificationError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "hanging"
    }
}
