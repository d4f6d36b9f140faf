//! Use cases (application services)
//!
//! Each use case orchestrates domain logic and ports.

pub mod pick_quote;
pub mod run_daemon;
pub mod show_quote;

#[cfg(test)]
pub(crate) mod test_support;
