//! Price command implementation
//!
//! Prices a European option with the pricer_pricing engine, then
//! optionally exports the per-path results.

use std::io::Write;
use std::path::Path;

use adapter_loader::{export_results, import_market_data};
use pricer_core::types::{SimulationConfig, SimulationResult};
use pricer_pricing::mc::price;
use tracing::{error, info, warn};

use crate::settings::{PricingInputs, Settings};
use crate::Result;

/// Files the price command reads or writes besides the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFiles<'a> {
    /// Destination for per-path results
    pub export: Option<&'a Path>,
    /// Historical market data to load before pricing
    pub market_data: Option<&'a Path>,
}

fn build_config(
    inputs: &PricingInputs,
    settings: &Settings,
    record_paths: bool,
) -> Result<SimulationConfig> {
    let config = SimulationConfig::builder()
        .n_simulations(inputs.n_simulations)
        .spot(inputs.spot)
        .strike(inputs.strike)
        .rate(inputs.rate)
        .volatility(inputs.volatility)
        .maturity(inputs.maturity)
        .kind(inputs.option_type)
        .maybe_seed(settings.seed)
        .maybe_worker_count(settings.workers)
        .record_paths(record_paths)
        .build()?;
    Ok(config)
}

fn load_market_data(path: &Path) {
    match import_market_data(path) {
        Ok(data) if data.is_empty() => {
            warn!(path = %path.display(), "Market data file contains no numeric rows");
        }
        Ok(data) => {
            info!(path = %path.display(), rows = data.len(), "Market data available");
        }
        Err(e) => {
            error!(error = %e, "Failed to load market data, continuing without it");
        }
    }
}

/// Run the price command, writing user-facing lines to `out`.
pub fn run<W: Write>(
    inputs: &PricingInputs,
    settings: &Settings,
    files: PriceFiles<'_>,
    out: &mut W,
) -> Result<SimulationResult> {
    if let Some(path) = files.market_data {
        load_market_data(path);
    }

    let config = build_config(inputs, settings, files.export.is_some())?;
    info!(
        spot = config.spot(),
        strike = config.strike(),
        rate = config.rate(),
        volatility = config.volatility(),
        maturity = config.maturity(),
        n_simulations = config.n_simulations(),
        kind = %config.kind(),
        "Starting pricing"
    );

    let result = price(config)?;
    writeln!(out, "Monte Carlo Option Price: {:.6}", result.price)?;
    info!(
        price = result.price,
        std_error = result.std_error,
        confidence_95 = result.confidence_95(),
        "Option priced"
    );

    if let Some(path) = files.export {
        match export_results(path, &result.path_prices) {
            Ok(_) => writeln!(out, "Results exported to {}", path.display())?,
            Err(e) => error!(error = %e, "Failed to export results"),
        }
    }

    Ok(result)
}
