//! # adapter_loader: CSV Adapters
//!
//! ## Adapter Layer Role
//!
//! adapter_loader moves data between the pricer and CSV files:
//! - `export`: writes recorded per-path prices (`Simulation,OptionPrice`)
//! - `market_data`: reads rows of historical prices, skipping bad fields
//!
//! Neither adapter knows about the pricing kernel; they exchange plain
//! `f64` slices and rows so the kernel stays free of I/O.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use adapter_loader::{export_results, import_market_data};
//!
//! let written = export_results("results.csv", &[1.5, 0.0, 3.25]).unwrap();
//! assert_eq!(written, 3);
//!
//! let data = import_market_data("market.csv").unwrap();
//! println!("{} rows loaded", data.len());
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod export;
pub mod market_data;

pub use error::LoaderError;
pub use export::{export_results, EXPORT_HEADER};
pub use market_data::{import_market_data, MarketData};
