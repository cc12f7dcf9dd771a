//! # Random Number Generation Infrastructure
//!
//! This module provides the standard normal samplers used by the Monte
//! Carlo workers.
//!
//! ## Design Rationale
//!
//! - **Per-worker ownership**: every worker builds its own
//!   [`GaussianSampler`]; no generator is ever shared between threads, so
//!   the sampling path needs no locking.
//! - **Independent streams**: worker seeds are derived from a single run
//!   seed with [`derive_seed`], a SplitMix64 finaliser, so neighbouring
//!   workers do not receive correlated seeds.
//! - **Reproducibility**: a fixed run seed and a fixed worker count give
//!   identical streams on every run.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::GaussianSampler;
//!
//! // One sampler per worker, derived from the run seed
//! let mut sampler = GaussianSampler::for_worker(12345, 0);
//!
//! // Standard normal variates (mean=0, std=1)
//! let z = sampler.next();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! sampler.fill(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::{derive_seed, GaussianSampler};

#[cfg(test)]
mod tests;
