//! # Pricer Engine (Layer 3: Monte Carlo Kernel)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation kernel of the workspace:
//! - Per-worker Gaussian sampling with independent seeding (`rng`)
//! - Exact GBM terminal-price simulation (`mc::paths`)
//! - Call/put payoff evaluation (`mc::payoff`)
//! - Balanced work partitioning across workers (`mc::partition`)
//! - Parallel aggregation with risk-neutral discounting (`mc::engine`)
//! - Closed-form Black-Scholes reference prices for verification (`analytical`)
//!
//! The kernel performs no I/O. It emits `tracing` events and leaves the
//! choice of subscriber to the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionKind, SimulationConfig};
//! use pricer_pricing::mc::MonteCarloEngine;
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(10_000)
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .kind(OptionKind::Call)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let engine = MonteCarloEngine::new(config).unwrap();
//! let result = engine.run().unwrap();
//! assert!(result.price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo kernel: paths, payoffs, partitioning, aggregation
pub mod mc;

// Analytical solutions for verification
pub mod analytical;

// Re-export commonly used items for convenience
pub use mc::{price, EngineError, MonteCarloEngine, PartialResult, WorkAssignment};
pub use rng::GaussianSampler;
