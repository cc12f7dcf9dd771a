//! CLI error types.

use pricer_core::types::ConfigError;
use pricer_pricing::mc::EngineError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `monte_carlo` binary. Every variant exits with
/// status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// A prompted value could not be read or parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The settings file is unreadable or malformed.
    #[error("Settings error: {0}")]
    Settings(String),

    /// The pricing parameters violate the configuration invariants.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The engine failed to run.
    #[error("Pricing failed: {0}")]
    Engine(#[from] EngineError),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidInput("spot price 'abc' is not a number".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: spot price 'abc' is not a number"
        );

        let err: CliError = ConfigError::InvalidSimulationCount(0).into();
        assert!(err.to_string().starts_with("Invalid configuration:"));

        let err: CliError = EngineError::from(ConfigError::InvalidWorkerCount(0)).into();
        assert!(err.to_string().starts_with("Pricing failed:"));
    }
}
