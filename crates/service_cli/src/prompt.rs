//! Interactive parameter entry.
//!
//! Reads one value per prompt from any `BufRead`, so the prompts can be
//! driven from a terminal or from an in-memory buffer in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use pricer_core::types::OptionKind;

use crate::error::{CliError, Result};
use crate::settings::PricingInputs;

/// Prompts on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str, name: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InvalidInput(format!(
                "input ended before {} was entered",
                name
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Reads a single numeric value.
    pub fn number<T: FromStr>(&mut self, prompt: &str, name: &str) -> Result<T> {
        let answer = self.ask(prompt, name)?;
        answer.parse().map_err(|_| {
            CliError::InvalidInput(format!("{} '{}' is not a valid number", name, answer))
        })
    }

    /// Reads the option type flag: `c` or `C` is a call, anything else
    /// (including an empty answer) a put.
    pub fn option_kind(&mut self, prompt: &str) -> Result<OptionKind> {
        let answer = self.ask(prompt, "option type")?;
        Ok(answer
            .chars()
            .next()
            .map_or(OptionKind::Put, OptionKind::from_flag))
    }

    /// Prompts for every pricing parameter in order.
    pub fn read_inputs(&mut self) -> Result<PricingInputs> {
        Ok(PricingInputs {
            spot: self.number("Enter spot price (S0): ", "spot price")?,
            strike: self.number("Enter strike price (K): ", "strike price")?,
            rate: self.number("Enter risk-free rate (r): ", "risk-free rate")?,
            volatility: self.number("Enter volatility (sigma): ", "volatility")?,
            maturity: self.number(
                "Enter time to expiration (T in years): ",
                "time to expiration",
            )?,
            n_simulations: self.number("Enter number of simulations: ", "number of simulations")?,
            option_type: self.option_kind("Enter option type (c for Call, p for Put): ")?,
        })
    }
}
