//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod history_store;
pub mod notifier;
pub mod quote_source;
