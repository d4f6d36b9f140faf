//! Configuration file loading for happyquotes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `HAPPYQUOTES_<SECTION>__<KEY>`
//! 2. Project root: `./happyquotes.toml` or `./.happyquotes.toml`
//! 3. Global: `<config_dir>/happyquotes/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDaemonConfig, FileHistoryConfig, FileLoggingConfig, FileNotificationConfig,
    FileQuotesConfig, expand_path,
};
pub use loader::ConfigLoader;
