//! Aggregated outcome of a pricing run.

/// Monte Carlo price estimate.
///
/// Produced exactly once per run and immutable thereafter.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationResult;
///
/// let result = SimulationResult {
///     price: 10.45,
///     std_error: 0.05,
///     n_simulations: 100_000,
///     n_workers: 8,
///     path_prices: Vec::new(),
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Discounted standard error of the mean.
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_simulations: usize,
    /// Number of workers that shared the paths.
    pub n_workers: usize,
    /// Discounted per-path payoffs, worker by worker. Empty unless
    /// path recording was requested.
    pub path_prices: Vec<f64>,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}
