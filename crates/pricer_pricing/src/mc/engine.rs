//! Parallel Monte Carlo engine.
//!
//! This module provides the aggregation layer of the kernel. The
//! [`MonteCarloEngine`] coordinates:
//! 1. Work partitioning (via [`partition`](super::partition::partition))
//! 2. One worker per assignment on a fixed-size rayon pool
//! 3. Per-worker sampling, path simulation and payoff accumulation
//! 4. Reduction of the per-worker partial sums and discounting
//!
//! # Shared State
//!
//! Workers share nothing mutable. Each writes exactly one
//! [`PartialResult`] into its own pre-sized slot, addressed by worker id,
//! so publication needs no lock. Returning from the parallel section is
//! the join barrier that makes every slot visible to the reduction.

use pricer_core::types::{SimulationConfig, SimulationResult};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use super::error::EngineError;
use super::partition::{partition, resolve_worker_count, WorkAssignment};
use super::paths::PathSimulator;
use super::payoff::payoff;
use crate::rng::GaussianSampler;

/// Payoff accumulation of one worker.
///
/// Owned exclusively by its producing worker until the join.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialResult {
    /// Producing worker.
    pub worker_id: usize,
    /// Number of paths simulated.
    pub n_simulations: usize,
    /// Sum of undiscounted payoffs.
    pub payoff_sum: f64,
    /// Sum of squared undiscounted payoffs.
    pub payoff_sum_sq: f64,
    /// Undiscounted per-path payoffs (only when path recording is on).
    pub payoffs: Vec<f64>,
}

impl PartialResult {
    fn empty(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Default::default()
        }
    }
}

/// Runs one worker's share of the simulation.
///
/// Everything the loop touches is local: a private sampler seeded for
/// this worker, a private simulator and two running sums.
fn run_worker(
    config: &SimulationConfig,
    assignment: WorkAssignment,
    run_seed: u64,
) -> PartialResult {
    let mut sampler = GaussianSampler::for_worker(run_seed, assignment.worker_id);
    let simulator = PathSimulator::new(config);
    let strike = config.strike();
    let kind = config.kind();
    let record = config.record_paths();

    let mut payoffs = if record {
        Vec::with_capacity(assignment.n_simulations)
    } else {
        Vec::new()
    };
    let mut payoff_sum = 0.0;
    let mut payoff_sum_sq = 0.0;

    for _ in 0..assignment.n_simulations {
        let value = payoff(simulator.simulate(&mut sampler), strike, kind);
        payoff_sum += value;
        payoff_sum_sq += value * value;
        if record {
            payoffs.push(value);
        }
    }

    PartialResult {
        worker_id: assignment.worker_id,
        n_simulations: assignment.n_simulations,
        payoff_sum,
        payoff_sum_sq,
        payoffs,
    }
}

/// Reduces the worker slots into the discounted estimate.
///
/// Slots are summed in worker order, so a fixed seed and worker count give
/// a bit-identical price.
fn aggregate(config: &SimulationConfig, partials: Vec<PartialResult>) -> SimulationResult {
    let n_simulations = config.n_simulations();
    let n = n_simulations as f64;
    let discount_factor = config.discount_factor();
    let n_workers = partials.len();

    let (sum, sum_sq) = partials.iter().fold((0.0, 0.0), |(s, q), p| {
        (s + p.payoff_sum, q + p.payoff_sum_sq)
    });
    let mean = sum / n;

    let std_error = if n_simulations > 1 {
        let variance = ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    } else {
        0.0
    };

    let path_prices = if config.record_paths() {
        partials
            .into_iter()
            .flat_map(|p| p.payoffs)
            .map(|value| value * discount_factor)
            .collect()
    } else {
        Vec::new()
    };

    SimulationResult {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
        n_simulations,
        n_workers,
        path_prices,
    }
}

/// Monte Carlo pricing engine for European options.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, SimulationConfig};
/// use pricer_pricing::mc::MonteCarloEngine;
///
/// let config = SimulationConfig::builder()
///     .n_simulations(20_000)
///     .spot(100.0)
///     .strike(110.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .kind(OptionKind::Call)
///     .worker_count(4)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let engine = MonteCarloEngine::new(config).unwrap();
/// let result = engine.run().unwrap();
///
/// assert_eq!(result.n_workers, 4);
/// println!("Price: {} +/- {}", result.price, result.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates an engine for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation and returns the discounted price estimate.
    ///
    /// Without a configured seed, the run seed is drawn from system
    /// entropy and logged at debug level so the run can be replayed.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WorkerPool` if the workers cannot be started.
    /// There is no partial result in that case.
    pub fn run(&self) -> Result<SimulationResult, EngineError> {
        let config = &self.config;
        let worker_count = resolve_worker_count(config);
        let assignments = partition(config.n_simulations(), worker_count);
        let run_seed = config.seed().unwrap_or_else(rand::random);

        debug!(
            n_simulations = config.n_simulations(),
            worker_count,
            run_seed,
            kind = %config.kind(),
            "Starting Monte Carlo run"
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("mc-worker-{i}"))
            .build()
            .map_err(|e| EngineError::WorkerPool {
                workers: worker_count,
                reason: e.to_string(),
            })?;

        let mut slots: Vec<PartialResult> = assignments
            .iter()
            .map(|a| PartialResult::empty(a.worker_id))
            .collect();

        pool.install(|| {
            slots
                .par_iter_mut()
                .zip(assignments.par_iter())
                .for_each(|(slot, assignment)| {
                    *slot = run_worker(config, *assignment, run_seed);
                });
        });

        let result = aggregate(config, slots);

        info!(
            price = result.price,
            std_error = result.std_error,
            n_simulations = result.n_simulations,
            n_workers = result.n_workers,
            "Option price estimated"
        );

        Ok(result)
    }
}

/// Prices a configuration in one call.
///
/// # Errors
///
/// See [`MonteCarloEngine::new`] and [`MonteCarloEngine::run`].
pub fn price(config: SimulationConfig) -> Result<SimulationResult, EngineError> {
    MonteCarloEngine::new(config)?.run()
}
