//! # pricer_core: Foundation Types for Monte Carlo Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace. It provides:
//! - Option kinds with their payoff functions: `OptionKind` (`types::option`)
//! - Immutable run configuration: `SimulationConfig` (`types::config`)
//! - The final price estimate: `SimulationResult` (`types::result`)
//! - Configuration errors: `ConfigError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates and performs no I/O.
//! External dependencies are kept minimal:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(10_000)
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .kind(OptionKind::Call)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.n_simulations(), 10_000);
//! assert!((config.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionKind` and `SimulationResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{
    ConfigError, OptionKind, SimulationConfig, SimulationConfigBuilder, SimulationResult,
    MAX_WORKER_COUNT,
};
