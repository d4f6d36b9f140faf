//! Infrastructure layer for happyquotes
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod history;
pub mod notification;
pub mod quotes;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDaemonConfig, FileHistoryConfig, FileLoggingConfig,
    FileNotificationConfig, FileQuotesConfig,
};
pub use history::JsonFileHistoryStore;
pub use notification::{AppleScriptNotifier, NotifySendNotifier, platform_notifier};
pub use quotes::{EmbeddedQuoteSource, JsonFileQuoteSource, quote_source_for};
