//! Presentation layer for happyquotes
//!
//! This crate contains the command line definition.

pub mod cli;

// Re-export commonly used types
pub use cli::commands::{Cli, RunMode};
