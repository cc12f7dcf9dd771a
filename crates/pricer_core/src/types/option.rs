//! European option kinds.
//!
//! [`OptionKind`] is a closed two-variant type carrying its own payoff, so
//! payoff dispatch is exhaustive and testable in isolation.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Kind of European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0).
    #[default]
    Call,
    /// Right to sell at the strike: max(K - S, 0).
    Put,
}

impl OptionKind {
    /// Payoff at maturity for the given terminal price and strike.
    ///
    /// Always non-negative for finite inputs.
    #[inline]
    pub fn payoff(self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal_price - strike).max(0.0),
            OptionKind::Put => (strike - terminal_price).max(0.0),
        }
    }

    /// Interprets the single-character flag used by interactive entry.
    ///
    /// `c` or `C` selects a call; anything else selects a put.
    #[inline]
    pub fn from_flag(flag: char) -> Self {
        match flag {
            'c' | 'C' => OptionKind::Call,
            _ => OptionKind::Put,
        }
    }

    /// Lowercase name, as used in settings files and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(ConfigError::InvalidOptionKind(other.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
