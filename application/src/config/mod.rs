//! Application-level run parameters.
//!
//! These are resolved from the configuration files by the infrastructure
//! layer and handed to the use cases at construction.

mod run_params;

pub use run_params::{CycleParams, DaemonParams};
