//! CLI command definitions

use clap::Parser;

/// How the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Show one quote and exit
    SingleShot,
    /// Show a quote on every interval until SIGINT/SIGTERM
    Daemon,
}

/// CLI arguments for happyquotes
#[derive(Parser, Debug)]
#[command(name = "happyquotes")]
#[command(author, version, about = "Motivational quotes as desktop notifications")]
#[command(long_about = r#"
happyquotes shows a motivational quote as a desktop notification. Quotes are
not repeated until every quote in the pool has been shown.

Without flags a single quote is shown. With --daemon a quote is shown right
away and then once per interval until the process receives SIGINT or SIGTERM.

Configuration files are loaded from (in priority order):
1. HAPPYQUOTES_<SECTION>__<KEY> environment variables
2. ./happyquotes.toml    Project-level config
3. ~/.config/happyquotes/config.toml   Global config

Example:
  happyquotes
  happyquotes --daemon
  HAPPYQUOTES_DAEMON__INTERVAL_SECS=900 happyquotes --daemon
"#)]
pub struct Cli {
    /// Keep running and show a quote every interval
    #[arg(long)]
    pub daemon: bool,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.daemon {
            RunMode::Daemon
        } else {
            RunMode::SingleShot
        }
    }
}
