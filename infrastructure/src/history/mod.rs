//! History persistence adapters implementing
//! [`HistoryStore`](happyquotes_application::HistoryStore).

mod json_file;

pub use json_file::JsonFileHistoryStore;
