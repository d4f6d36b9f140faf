//! Run Daemon use case.
//!
//! The scheduler: runs [`ShowQuoteUseCase`] immediately, then once per
//! interval, until shutdown is requested through the [`SchedulerContext`].
//!
//! A failing cycle is logged and counted but never stops the loop. Shutdown
//! is cooperative: it is observed before a cycle starts and during the wait
//! between cycles, never in the middle of a cycle.

use crate::config::DaemonParams;
use crate::use_cases::show_quote::ShowQuoteUseCase;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Scheduler lifecycle. `Stopping` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Stopping,
}

/// Shared scheduler state: the interval and the termination flag.
///
/// Cloning yields a handle onto the same flag, so the host environment can
/// keep one clone to request shutdown from a signal handler task.
#[derive(Debug, Clone)]
pub struct SchedulerContext {
    interval: Duration,
    shutdown: CancellationToken,
}

impl SchedulerContext {
    pub fn new(params: DaemonParams) -> Self {
        Self::with_token(params, CancellationToken::new())
    }

    pub fn with_token(params: DaemonParams, shutdown: CancellationToken) -> Self {
        Self {
            interval: params.interval,
            shutdown,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token observed by the wait step.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Request termination. Idempotent.
    pub fn request_shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn state(&self) -> SchedulerState {
        if self.shutdown.is_cancelled() {
            SchedulerState::Stopping
        } else {
            SchedulerState::Running
        }
    }
}

/// Counters returned when the daemon stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaemonReport {
    /// Cycles started (and completed)
    pub cycles: u64,
    /// Cycles that ended in an error
    pub failures: u64,
}

/// Use case for daemon mode.
pub struct RunDaemonUseCase {
    cycle: ShowQuoteUseCase,
}

impl RunDaemonUseCase {
    pub fn new(cycle: ShowQuoteUseCase) -> Self {
        Self { cycle }
    }

    /// Run until `context` is cancelled.
    pub async fn execute(&self, context: &SchedulerContext) -> DaemonReport {
        info!(
            "Daemon started (interval={}s)",
            context.interval().as_secs()
        );

        let mut report = DaemonReport::default();
        let shutdown = context.shutdown_token();

        while context.state() == SchedulerState::Running {
            report.cycles += 1;
            match self.cycle.execute().await {
                Ok(outcome) => debug!("Cycle {} showed \"{}\"", report.cycles, outcome.quote.text),
                Err(e) => {
                    report.failures += 1;
                    error!("Error showing quote: {}", e);
                }
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(context.interval()) => {}
            }
        }

        info!(
            "Daemon stopped after {} cycles ({} failed)",
            report.cycles, report.failures
        );
        report
    }
}
