//! Payoff evaluation at maturity.
//!
//! The payoff itself lives on [`OptionKind`]; this module exposes it in
//! the kernel's free-function form and collects the per-path checks.

use pricer_core::types::OptionKind;

/// Payoff of a European option for one terminal price.
///
/// - Call: `max(S - K, 0)`
/// - Put: `max(K - S, 0)`
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionKind;
/// use pricer_pricing::mc::payoff;
///
/// assert_eq!(payoff(120.0, 100.0, OptionKind::Call), 20.0);
/// assert_eq!(payoff(120.0, 100.0, OptionKind::Put), 0.0);
/// ```
#[inline]
pub fn payoff(terminal_price: f64, strike: f64, kind: OptionKind) -> f64 {
    kind.payoff(terminal_price, strike)
}
