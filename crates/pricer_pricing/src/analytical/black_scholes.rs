//! Black-Scholes closed form for European options.
//!
//! # Mathematical Formula
//!
//! ```text
//! d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d2 = d1 - σ√T
//! C  = S·N(d1) - K·exp(-rT)·N(d2)
//! P  = K·exp(-rT)·N(-d2) - S·N(-d1)
//! ```
//!
//! This is the limit the Monte Carlo estimate converges to under the same
//! GBM dynamics.

use num_traits::Float;
use pricer_core::types::OptionKind;

/// Standard normal CDF approximation.
///
/// Uses the Abramowitz and Stegun approximation (7.1.26) for the
/// complementary error function, accurate to about 1.5e-7.
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    // Handle extreme values
    if x.abs() > T::from(8.0).unwrap() {
        return if x > zero { one } else { zero };
    }

    // Abramowitz and Stegun constants
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // Φ(x) = ½·erfc(-x/√2)
    let arg = -x / sqrt_2;
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();
    let erfc_val = if arg < zero { two - erfc_abs } else { erfc_abs };

    half * erfc_val
}

/// Black-Scholes price of a European option.
///
/// With zero volatility or zero maturity the option is worth the
/// discounted intrinsic value of the forward.
///
/// # Arguments
///
/// * `spot` - Current spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free rate (annualised)
/// * `volatility` - Volatility (annualised)
/// * `maturity` - Time to maturity (years)
/// * `kind` - Call or put
pub fn black_scholes_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    kind: OptionKind,
) -> T {
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let discount = (-rate * maturity).exp();

    let vol_sqrt_t = volatility * maturity.sqrt();
    if vol_sqrt_t <= zero {
        let forward = spot * (rate * maturity).exp();
        let intrinsic = match kind {
            OptionKind::Call => (forward - strike).max(zero),
            OptionKind::Put => (strike - forward).max(zero),
        };
        return discount * intrinsic;
    }

    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    match kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}
