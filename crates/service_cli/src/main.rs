//! monte_carlo - Parallel Monte Carlo Pricing for European Options
//!
//! Prices a European call or put under geometric Brownian motion.
//!
//! # Usage
//!
//! - `monte_carlo` - prompt for parameters when stdin is a terminal,
//!   otherwise price with the configured defaults
//! - `monte_carlo --export <file>` - also write per-path results as CSV
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate gathers inputs, hands a
//! validated configuration to `pricer_pricing`, and routes results to the
//! terminal and `adapter_loader`. Diagnostics go to stderr through
//! `tracing`; stdout carries only results.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod prompt;
mod settings;

pub use error::{CliError, Result};

use commands::price::PriceFiles;
use prompt::Prompter;
use settings::{build_settings, LogLevel, Overrides, PricingInputs, Settings};

/// Parallel Monte Carlo pricer for European options
#[derive(Parser, Debug)]
#[command(name = "monte_carlo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write per-path results to this CSV file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Fixed run seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Historical market data CSV to load before pricing
    #[arg(long, value_name = "FILE")]
    market_data: Option<PathBuf>,

    /// Settings file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level,
            seed: self.seed,
            workers: self.workers,
        }
    }

    fn files(&self) -> PriceFiles<'_> {
        PriceFiles {
            export: self.export.as_deref(),
            market_data: self.market_data.as_deref(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_inputs(settings: &Settings) -> Result<PricingInputs> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        info!("Non-interactive mode detected, using default parameters");
        return Ok(settings.defaults.clone());
    }

    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.read_inputs()
}

fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let inputs = read_inputs(settings)?;
    let mut stdout = io::stdout().lock();
    commands::price::run(&inputs, settings, cli.files(), &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let settings = match build_settings(cli.config.as_deref(), &cli.overrides()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(settings.log_level.as_filter_str());
    info!("Monte Carlo pricing engine started");

    match run(&cli, &settings) {
        Ok(()) => {
            info!("Monte Carlo pricing engine completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Monte Carlo pricing engine failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
