//! Terminal price simulation under Geometric Brownian Motion.
//!
//! GBM has a known terminal distribution, so each path is a single exact
//! jump to maturity rather than a stepped Euler scheme:
//!
//! ```text
//! S(T) = S₀ × exp((r - ½σ²)T + σ√T × Z),   Z ~ N(0, 1)
//! ```

use pricer_core::types::SimulationConfig;

use crate::rng::GaussianSampler;

/// Exact GBM terminal-price sampler.
///
/// The drift and diffusion scale are precomputed once per worker so the
/// hot loop is one draw, one multiply-add and one `exp`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathSimulator;
///
/// let sim = PathSimulator::from_params(100.0, 0.05, 0.2, 1.0);
///
/// // z = 0 gives the median terminal price S₀·exp((r - ½σ²)T)
/// let median = sim.terminal_price(0.0);
/// assert!((median - 100.0 * (0.03_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSimulator {
    /// Initial spot price (S₀).
    spot: f64,
    /// `(r - ½σ²)·T`.
    drift: f64,
    /// `σ·√T`.
    vol_sqrt_t: f64,
}

impl PathSimulator {
    /// Creates a simulator for the market inputs of a configuration.
    #[inline]
    pub fn new(config: &SimulationConfig) -> Self {
        Self::from_params(
            config.spot(),
            config.rate(),
            config.volatility(),
            config.maturity(),
        )
    }

    /// Creates a simulator from raw GBM parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial spot price
    /// * `rate` - Risk-free rate (annualised)
    /// * `volatility` - Volatility (annualised)
    /// * `maturity` - Time to maturity (years)
    #[inline]
    pub fn from_params(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift: (rate - 0.5 * volatility * volatility) * maturity,
            vol_sqrt_t: volatility * maturity.sqrt(),
        }
    }

    /// Maps a standard normal shock onto a terminal price.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.vol_sqrt_t * z).exp()
    }

    /// Draws one shock from the sampler and returns the terminal price.
    #[inline]
    pub fn simulate(&self, sampler: &mut GaussianSampler) -> f64 {
        self.terminal_price(sampler.next())
    }
}

/// Simulates one terminal price for the configuration.
///
/// Convenience form of [`PathSimulator::simulate`] for single draws; the
/// engine builds a [`PathSimulator`] once per worker instead.
#[inline]
pub fn simulate_terminal_price(config: &SimulationConfig, sampler: &mut GaussianSampler) -> f64 {
    PathSimulator::new(config).simulate(sampler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(volatility: f64, maturity: f64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_simulations(1)
            .spot(100.0)
            .strike(100.0)
            .rate(0.05)
            .volatility(volatility)
            .maturity(maturity)
            .build()
            .unwrap()
    }

    #[test]
    fn test_terminal_price_formula() {
        let sim = PathSimulator::new(&config(0.2, 1.0));
        let z: f64 = 1.5;
        let expected = 100.0 * ((0.05 - 0.5 * 0.04) * 1.0 + 0.2 * 1.0 * z).exp();
        assert_relative_eq!(sim.terminal_price(z), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_maturity_returns_spot() {
        let sim = PathSimulator::new(&config(0.2, 0.0));
        assert_relative_eq!(sim.terminal_price(3.0), 100.0, epsilon = 1e-12);
        assert_relative_eq!(sim.terminal_price(-3.0), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_forward() {
        let sim = PathSimulator::new(&config(0.0, 2.0));
        let forward = 100.0 * (0.05_f64 * 2.0).exp();
        assert_relative_eq!(sim.terminal_price(-2.0), forward, epsilon = 1e-10);
        assert_relative_eq!(sim.terminal_price(2.0), forward, epsilon = 1e-10);
    }

    #[test]
    fn test_terminal_price_positive() {
        let sim = PathSimulator::new(&config(0.8, 5.0));
        let mut sampler = GaussianSampler::from_seed(1);
        for _ in 0..10_000 {
            let s = sim.simulate(&mut sampler);
            assert!(s > 0.0 && s.is_finite());
        }
    }

    /// Risk-neutral martingale check: E[S(T)] = S₀·exp(rT).
    #[test]
    fn test_terminal_mean_is_forward() {
        let cfg = config(0.2, 1.0);
        let mut sampler = GaussianSampler::from_seed(2024);
        let n = 200_000;
        let mean = (0..n)
            .map(|_| simulate_terminal_price(&cfg, &mut sampler))
            .sum::<f64>()
            / n as f64;

        let forward = 100.0 * (0.05_f64).exp();
        assert!(
            (mean - forward).abs() < 0.3,
            "Mean terminal price {} vs forward {}",
            mean,
            forward
        );
    }
}
