//! Option, configuration and result types.
//!
//! This module provides:
//! - `option`: The closed Call/Put option kind with its payoff
//! - `config`: Validated, immutable simulation configuration and its builder
//! - `result`: The aggregated price estimate of one pricing run
//! - `error`: Structured configuration errors
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`] from `option`
//! - [`SimulationConfig`], [`SimulationConfigBuilder`] from `config`
//! - [`SimulationResult`] from `result`
//! - [`ConfigError`] from `error`

pub mod config;
pub mod error;
pub mod option;
pub mod result;

// Re-export commonly used types at module level
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_WORKER_COUNT};
pub use error::ConfigError;
pub use option::OptionKind;
pub use result::SimulationResult;
