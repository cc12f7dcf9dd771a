//! Error types for structured error handling.
//!
//! This module provides `ConfigError`, raised when a simulation
//! configuration violates its invariants. Pricing itself has no
//! recoverable failure modes over a validated configuration.

use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur at build time when invalid parameters are provided.
///
/// # Examples
/// ```
/// use pricer_core::types::ConfigError;
///
/// let err = ConfigError::InvalidSimulationCount(0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid simulation count 0: must be at least 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Simulation count is zero.
    #[error("Invalid simulation count {0}: must be at least 1")]
    InvalidSimulationCount(usize),

    /// Worker count override is zero or above [`MAX_WORKER_COUNT`](super::config::MAX_WORKER_COUNT).
    #[error("Invalid worker count {0}: must be between 1 and {max}", max = super::config::MAX_WORKER_COUNT)]
    InvalidWorkerCount(usize),

    /// A numeric input is NaN or infinite.
    #[error("Invalid parameter '{name}': {value} is not finite")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A numeric input that must be non-negative is negative.
    #[error("Invalid parameter '{name}': {value} must be non-negative")]
    Negative {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Option kind string is neither a call nor a put.
    #[error("Invalid option kind '{0}': must be 'call' or 'put'")]
    InvalidOptionKind(String),

    /// A required builder field was never set.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSimulationCount(0);
        assert!(err.to_string().contains("Invalid simulation count 0"));

        let err = ConfigError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("Invalid worker count 0"));

        let err = ConfigError::NonFinite {
            name: "spot",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("spot"));
        assert!(err.to_string().contains("not finite"));

        let err = ConfigError::Negative {
            name: "volatility",
            value: -0.2,
        };
        assert!(err.to_string().contains("volatility"));
        assert!(err.to_string().contains("-0.2"));

        let err = ConfigError::InvalidOptionKind("straddle".to_string());
        assert!(err.to_string().contains("straddle"));

        let err = ConfigError::MissingParameter("strike");
        assert_eq!(err.to_string(), "Missing parameter 'strike': must be specified");
    }
}
