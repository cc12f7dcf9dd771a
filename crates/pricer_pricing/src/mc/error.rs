//! Error types for the Monte Carlo engine.
//!
//! Pricing over a validated configuration is pure arithmetic; the only
//! runtime failure is being unable to start the workers, which is fatal.

use pricer_core::types::ConfigError;
use thiserror::Error;

/// Engine error for Monte Carlo pricing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configuration violates its invariants.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The worker pool could not be started.
    #[error("Failed to start {workers} workers: {reason}")]
    WorkerPool {
        /// Number of workers requested.
        workers: usize,
        /// Underlying failure description.
        reason: String,
    },
}
