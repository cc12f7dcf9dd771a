//! Analytical (closed-form) solutions for option pricing.
//!
//! This module provides the Black-Scholes formula for European options
//! to verify Monte Carlo pricing accuracy.
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::OptionKind;
//! use pricer_pricing::analytical::black_scholes_price;
//!
//! let price = black_scholes_price(
//!     100.0_f64, // spot
//!     100.0,     // strike
//!     0.05,      // risk-free rate
//!     0.2,       // volatility
//!     1.0,       // time to maturity
//!     OptionKind::Call,
//! );
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

pub mod black_scholes;

pub use black_scholes::{black_scholes_price, norm_cdf};
