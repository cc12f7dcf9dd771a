//! Parallel Monte Carlo kernel for European options.
//!
//! This module provides the simulation pipeline that turns a validated
//! [`SimulationConfig`](pricer_core::types::SimulationConfig) into a
//! discounted price estimate.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine            (ParallelAggregator)
//! ├── partition()             (WorkPartitioner)
//! └── one worker per WorkAssignment
//!     ├── GaussianSampler     (private, independently seeded)
//!     ├── PathSimulator       (exact GBM jump to maturity)
//!     └── payoff()            (PayoffEvaluator)
//! ```
//!
//! Each worker accumulates a local payoff sum and publishes it into its own
//! pre-allocated slot. The end of the parallel section is the join barrier;
//! the engine then reduces the slots and applies `exp(-r·T)`.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, SimulationConfig};
//! use pricer_pricing::mc::{price, partition};
//!
//! let assignments = partition(10, 4);
//! assert_eq!(
//!     assignments.iter().map(|a| a.n_simulations).collect::<Vec<_>>(),
//!     vec![3, 3, 2, 2]
//! );
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(1_000)
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .kind(OptionKind::Put)
//!     .build()
//!     .unwrap();
//!
//! let result = price(config).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
//! ```

pub mod engine;
pub mod error;
pub mod partition;
pub mod paths;
pub mod payoff;

// Re-exports for convenient access
pub use engine::{price, MonteCarloEngine, PartialResult};
pub use error::EngineError;
pub use partition::{
    default_worker_count, partition, resolve_worker_count, worker_count_from, WorkAssignment,
    FALLBACK_WORKERS,
};
pub use paths::{simulate_terminal_price, PathSimulator};
pub use payoff::payoff;
