//! Work partitioning across Monte Carlo workers.
//!
//! The total simulation count is split into near-equal chunks, one per
//! worker. The first `total mod workers` workers absorb one extra path
//! each, so every path is assigned exactly once.

use pricer_core::types::SimulationConfig;

/// Worker count used when the platform reports no concurrency.
pub const FALLBACK_WORKERS: usize = 2;

/// Simulation chunk assigned to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorkAssignment {
    /// Worker identity in `0..worker_count`.
    pub worker_id: usize,
    /// Number of paths this worker simulates.
    pub n_simulations: usize,
}

/// Splits `total` simulations across `worker_count` workers.
///
/// Each worker receives `total / worker_count` paths, plus one for each of
/// the first `total % worker_count` workers. A `worker_count` of zero is
/// treated as one.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::partition;
///
/// let chunks = partition(10, 3);
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].n_simulations, 4);
/// assert_eq!(chunks[1].n_simulations, 3);
/// assert_eq!(chunks[2].n_simulations, 3);
/// ```
pub fn partition(total: usize, worker_count: usize) -> Vec<WorkAssignment> {
    let workers = worker_count.max(1);
    let base = total / workers;
    let remainder = total % workers;

    (0..workers)
        .map(|worker_id| WorkAssignment {
            worker_id,
            n_simulations: base + usize::from(worker_id < remainder),
        })
        .collect()
}

/// Maps a reported hardware concurrency onto a worker count.
///
/// A report of zero means "unknown" and yields [`FALLBACK_WORKERS`].
#[inline]
pub fn worker_count_from(reported: usize) -> usize {
    match reported {
        0 => FALLBACK_WORKERS,
        n => n,
    }
}

/// Platform hardware concurrency, or [`FALLBACK_WORKERS`] if it reports zero.
pub fn default_worker_count() -> usize {
    worker_count_from(num_cpus::get())
}

/// Worker count for a run: the configured override, else the platform default.
#[inline]
pub fn resolve_worker_count(config: &SimulationConfig) -> usize {
    config.worker_count().unwrap_or_else(default_worker_count)
}
