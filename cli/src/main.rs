//! CLI entrypoint for happyquotes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use happyquotes_application::{RunDaemonUseCase, SchedulerContext, ShowQuoteUseCase};
use happyquotes_infrastructure::{
    ConfigLoader, FileLoggingConfig, JsonFileHistoryStore, platform_notifier, quote_source_for,
};
use happyquotes_presentation::{Cli, RunMode};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&config.logging)?;

    // === Dependency Injection ===
    let quote_source = quote_source_for(config.quotes.resolved_file());
    let history = JsonFileHistoryStore::new(config.history.resolved_file());
    let notifier = platform_notifier();

    info!(
        "Quotes from {}, history at {}, notifier {}",
        quote_source.describe(),
        history.path().display(),
        notifier.name()
    );

    let cycle = ShowQuoteUseCase::new(quote_source, Arc::new(history), notifier)
        .with_params(config.notification.to_cycle_params());

    match cli.mode() {
        RunMode::SingleShot => {
            if let Err(e) = cycle.execute().await {
                error!("Error showing quote: {}", e);
                return Err(e.into());
            }
        }
        RunMode::Daemon => {
            let context = SchedulerContext::new(config.daemon.to_daemon_params());
            tokio::spawn(forward_shutdown_signal(context.clone()));
            RunDaemonUseCase::new(cycle).execute(&context).await;
        }
    }

    Ok(())
}

/// Append timestamped lines to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &FileLoggingConfig) -> Result<WorkerGuard> {
    let path = config.resolved_file();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path {} has no file name", path.display()))?
        .to_string_lossy()
        .into_owned();

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .init();

    Ok(guard)
}

/// Wait for SIGINT or SIGTERM and request scheduler shutdown.
async fn forward_shutdown_signal(context: SchedulerContext) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    info!("Received {}, shutting down", signal_name);
    context.request_shutdown();
}
