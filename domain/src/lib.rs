//! Domain layer for happyquotes
//!
//! This crate contains the core entities and value objects. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Quote Pool**: the fixed, ordered set of quotes a run can choose from
//! - **History**: texts shown since the last reset; a quote whose text is in
//!   the history is not available for selection
//! - **Pool exhaustion**: every quote of the pool is in the history, at which
//!   point the history is discarded and the whole pool becomes available again

pub mod core;
pub mod history;
pub mod notification;
pub mod quote;
pub mod util;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use history::entities::History;
pub use notification::entities::{MAX_BODY_CHARS, Notification};
pub use quote::{entities::Quote, pool::QuotePool};
