//! Monte Carlo simulation configuration.
//!
//! [`SimulationConfig`] is created once per pricing run and is immutable
//! afterwards. Use [`SimulationConfigBuilder`] to construct instances; all
//! invariants are checked at build time so downstream code can assume a
//! valid configuration.

use super::error::ConfigError;
use super::option::OptionKind;

/// Largest accepted worker count override.
pub const MAX_WORKER_COUNT: usize = 1024;

/// Monte Carlo simulation configuration.
///
/// Holds the market inputs, the option contract and the run controls of a
/// single pricing run.
///
/// # Invariants
///
/// - `n_simulations >= 1`
/// - all numeric inputs are finite
/// - `volatility >= 0` and `maturity >= 0`
/// - `worker_count`, when set, is in `1..=MAX_WORKER_COUNT`
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_simulations(1_000)
///     .spot(100.0)
///     .strike(110.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .kind(OptionKind::Put)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.kind(), OptionKind::Put);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of simulated paths.
    n_simulations: usize,
    /// Initial spot price (S₀).
    spot: f64,
    /// Strike price (K).
    strike: f64,
    /// Risk-free rate (r), annualised.
    rate: f64,
    /// Volatility (σ), annualised.
    volatility: f64,
    /// Time to maturity (T) in years.
    maturity: f64,
    /// Call or put.
    kind: OptionKind,
    /// Optional run seed for reproducibility.
    seed: Option<u64>,
    /// Optional override of the detected hardware concurrency.
    worker_count: Option<usize>,
    /// Whether per-path results are kept for export.
    record_paths: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the optional run seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the optional worker count override.
    #[inline]
    pub fn worker_count(&self) -> Option<usize> {
        self.worker_count
    }

    /// Returns whether per-path results are recorded.
    #[inline]
    pub fn record_paths(&self) -> bool {
        self.record_paths
    }

    /// Risk-neutral discount factor `exp(-r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_simulations` is 0
    /// - any numeric input is NaN or infinite
    /// - `volatility` or `maturity` is negative
    /// - `worker_count` is `Some(0)` or above [`MAX_WORKER_COUNT`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 {
            return Err(ConfigError::InvalidSimulationCount(self.n_simulations));
        }

        let inputs = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("maturity", self.maturity),
        ];
        for (name, value) in inputs {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.volatility < 0.0 {
            return Err(ConfigError::Negative {
                name: "volatility",
                value: self.volatility,
            });
        }
        if self.maturity < 0.0 {
            return Err(ConfigError::Negative {
                name: "maturity",
                value: self.maturity,
            });
        }

        if let Some(workers) = self.worker_count {
            if workers == 0 || workers > MAX_WORKER_COUNT {
                return Err(ConfigError::InvalidWorkerCount(workers));
            }
        }

        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Market inputs and the simulation count are required. The option kind
/// defaults to a call; seed and worker count are optional; path recording
/// is off by default.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_simulations: Option<usize>,
    spot: Option<f64>,
    strike: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    kind: OptionKind,
    seed: Option<u64>,
    worker_count: Option<usize>,
    record_paths: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulated paths (at least 1).
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the initial spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the annualised risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the annualised volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the option kind.
    #[inline]
    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the run seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the run seed from an optional value.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the number of concurrent workers.
    #[inline]
    pub fn worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    /// Overrides the number of concurrent workers from an optional value.
    #[inline]
    pub fn maybe_worker_count(mut self, worker_count: Option<usize>) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Keeps per-path discounted payoffs in the result.
    #[inline]
    pub fn record_paths(mut self, record_paths: bool) -> Self {
        self.record_paths = record_paths;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingParameter` if a required field was not
    /// set, or any error from [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            n_simulations: self
                .n_simulations
                .ok_or(ConfigError::MissingParameter("n_simulations"))?,
            spot: self.spot.ok_or(ConfigError::MissingParameter("spot"))?,
            strike: self.strike.ok_or(ConfigError::MissingParameter("strike"))?,
            rate: self.rate.ok_or(ConfigError::MissingParameter("rate"))?,
            volatility: self
                .volatility
                .ok_or(ConfigError::MissingParameter("volatility"))?,
            maturity: self
                .maturity
                .ok_or(ConfigError::MissingParameter("maturity"))?,
            kind: self.kind,
            seed: self.seed,
            worker_count: self.worker_count,
            record_paths: self.record_paths,
        };

        config.validate()?;
        Ok(config)
    }
}
