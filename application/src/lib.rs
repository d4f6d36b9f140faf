//! Application layer for happyquotes
//!
//! This crate contains use cases, port definitions, and run parameters.
//! It depends only on the domain layer.
//!
//! - [`PickQuoteUseCase`]: non-repeating selection with history persistence
//! - [`ShowQuoteUseCase`]: one cycle (load pool, pick, notify)
//! - [`RunDaemonUseCase`]: repeats cycles on an interval until cancelled

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CycleParams, DaemonParams};
pub use ports::{
    history_store::{HistoryStore, InMemoryHistoryStore, PersistenceError},
    notifier::{NotificationError, Notifier},
    quote_source::{QuoteSource, QuoteSourceError},
};
pub use use_cases::pick_quote::{PickQuoteUseCase, PickedQuote};
pub use use_cases::run_daemon::{DaemonReport, RunDaemonUseCase, SchedulerContext, SchedulerState};
pub use use_cases::show_quote::{CycleError, CycleOutcome, ShowQuoteUseCase};
