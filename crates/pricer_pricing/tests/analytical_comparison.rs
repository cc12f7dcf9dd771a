//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the
//! Black-Scholes closed form for European options.
//!
//! # Test Categories
//!
//! 1. **Convergence**: MC vs Black-Scholes for calls and puts
//! 2. **Worker independence**: the estimate does not depend on the worker count
//! 3. **Properties**: non-negativity and parity across configurations

use approx::assert_relative_eq;
use pricer_core::types::{OptionKind, SimulationConfig};
use pricer_pricing::analytical::black_scholes_price;
use pricer_pricing::mc::{price, MonteCarloEngine};
use proptest::prelude::*;

/// Standard test parameters: spot, strike, rate, vol, maturity.
fn standard_params() -> (f64, f64, f64, f64, f64) {
    (100.0, 100.0, 0.05, 0.2, 1.0)
}

fn standard_config(n: usize, kind: OptionKind) -> SimulationConfig {
    let (spot, strike, rate, vol, maturity) = standard_params();
    SimulationConfig::builder()
        .n_simulations(n)
        .spot(spot)
        .strike(strike)
        .rate(rate)
        .volatility(vol)
        .maturity(maturity)
        .kind(kind)
        .build()
        .unwrap()
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_atm_call_converges_to_black_scholes() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let analytical = black_scholes_price(spot, strike, rate, vol, maturity, OptionKind::Call);

    // Repeated unseeded runs, as the engine reseeds from entropy each time
    for _ in 0..3 {
        let result = price(standard_config(100_000, OptionKind::Call)).unwrap();
        let error = (result.price - analytical).abs();

        assert!(
            error < (4.0 * result.std_error).max(0.03 * analytical),
            "ATM Call: MC={:.4}, Analytical={:.4}, Error={:.4}, StdErr={:.4}",
            result.price,
            analytical,
            error,
            result.std_error
        );
    }
}

#[test]
fn test_atm_put_converges_to_black_scholes() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let analytical = black_scholes_price(spot, strike, rate, vol, maturity, OptionKind::Put);

    let result = price(standard_config(100_000, OptionKind::Put)).unwrap();
    let error = (result.price - analytical).abs();

    assert!(
        error < (4.0 * result.std_error).max(0.03 * analytical),
        "ATM Put: MC={:.4}, Analytical={:.4}, Error={:.4}",
        result.price,
        analytical,
        error
    );
}

#[test]
fn test_otm_call_default_parameters() {
    // The non-interactive defaults: S=100, K=110, r=5%, σ=20%, T=1
    let analytical = black_scholes_price(100.0, 110.0, 0.05, 0.2, 1.0, OptionKind::Call);
    let config = SimulationConfig::builder()
        .n_simulations(100_000)
        .spot(100.0)
        .strike(110.0)
        .rate(0.05)
        .volatility(0.2)
        .maturity(1.0)
        .kind(OptionKind::Call)
        .seed(2024)
        .build()
        .unwrap();

    let result = price(config).unwrap();
    assert!(
        (result.price - analytical).abs() < 4.0 * result.std_error,
        "OTM Call: MC={:.4}, Analytical={:.4}",
        result.price,
        analytical
    );
}

#[test]
fn test_std_error_shrinks_with_paths() {
    let small = price(standard_config(1_000, OptionKind::Call)).unwrap();
    let large = price(standard_config(100_000, OptionKind::Call)).unwrap();

    // Standard error scales as 1/√n: a 100x increase gives roughly 10x less
    assert!(large.std_error < small.std_error / 5.0);
}

// ============================================================================
// Worker Independence Tests
// ============================================================================

#[test]
fn test_worker_count_does_not_bias_price() {
    let (spot, strike, rate, vol, maturity) = standard_params();
    let analytical = black_scholes_price(spot, strike, rate, vol, maturity, OptionKind::Call);

    for workers in [1, 2, 3, 7, 16] {
        let config = SimulationConfig::builder()
            .n_simulations(50_000)
            .spot(spot)
            .strike(strike)
            .rate(rate)
            .volatility(vol)
            .maturity(maturity)
            .worker_count(workers)
            .seed(100 + workers as u64)
            .build()
            .unwrap();

        let engine = MonteCarloEngine::new(config).unwrap();
        let result = engine.run().unwrap();

        assert_eq!(result.n_workers, workers);
        assert!(
            (result.price - analytical).abs() < 4.0 * result.std_error,
            "{} workers: MC={:.4}, Analytical={:.4}",
            workers,
            result.price,
            analytical
        );
    }
}

#[test]
fn test_seeded_runs_match_exactly() {
    let build = || {
        SimulationConfig::builder()
            .n_simulations(20_000)
            .spot(100.0)
            .strike(95.0)
            .rate(0.03)
            .volatility(0.25)
            .maturity(0.5)
            .kind(OptionKind::Put)
            .worker_count(4)
            .seed(77)
            .build()
            .unwrap()
    };

    let a = price(build()).unwrap();
    let b = price(build()).unwrap();
    assert_eq!(a.price, b.price);
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[test]
fn test_end_to_end_call_and_put() {
    let call = price(standard_config(1_000, OptionKind::Call)).unwrap();
    let put = price(standard_config(1_000, OptionKind::Put)).unwrap();

    assert!(call.price.is_finite() && call.price > 0.0);
    assert!(put.price.is_finite() && put.price > 0.0);
}

#[test]
fn test_recorded_paths_average_to_price() {
    let config = SimulationConfig::builder()
        .n_simulations(10_000)
        .spot(100.0)
        .strike(100.0)
        .rate(0.05)
        .volatility(0.2)
        .maturity(1.0)
        .record_paths(true)
        .build()
        .unwrap();

    let result = price(config).unwrap();
    assert_eq!(result.path_prices.len(), 10_000);

    let mean = result.path_prices.iter().sum::<f64>() / 10_000.0;
    assert_relative_eq!(mean, result.price, max_relative = 1e-9);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_price_non_negative(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        rate in -0.05f64..0.2,
        vol in 0.0f64..1.0,
        maturity in 0.0f64..5.0,
        is_call in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let kind = if is_call { OptionKind::Call } else { OptionKind::Put };
        let config = SimulationConfig::builder()
            .n_simulations(200)
            .spot(spot)
            .strike(strike)
            .rate(rate)
            .volatility(vol)
            .maturity(maturity)
            .kind(kind)
            .worker_count(2)
            .seed(seed)
            .build()
            .unwrap();

        let result = price(config).unwrap();
        prop_assert!(result.price >= 0.0);
        prop_assert!(result.price.is_finite());
    }

    /// Same seed, same paths: discounted call - put equals S₀ - K·exp(-rT)
    /// up to sampling noise of the forward.
    #[test]
    fn prop_mc_put_call_parity(seed in any::<u64>()) {
        let build = |kind| {
            SimulationConfig::builder()
                .n_simulations(20_000)
                .spot(100.0)
                .strike(105.0)
                .rate(0.05)
                .volatility(0.2)
                .maturity(1.0)
                .kind(kind)
                .worker_count(2)
                .seed(seed)
                .build()
                .unwrap()
        };

        let call = price(build(OptionKind::Call)).unwrap();
        let put = price(build(OptionKind::Put)).unwrap();
        let parity = 100.0 - 105.0 * (-0.05_f64).exp();
        prop_assert!((call.price - put.price - parity).abs() < 1.0);
    }
}
