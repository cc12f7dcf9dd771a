//! Historical market data import.
//!
//! The input has no header and rows may have any number of fields. Each
//! field is trimmed and parsed as `f64`; a field that does not parse
//! (including one that is not valid UTF-8) is logged and skipped, and a
//! row left with no values is dropped.

use std::fs::File;
use std::path::Path;

use tracing::{info, warn};

use crate::error::LoaderError;

/// Rows of numeric market data in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketData {
    rows: Vec<Vec<f64>>,
}

impl MarketData {
    /// Returns the parsed rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when no row survived parsing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn parse_field(field: &[u8]) -> Option<f64> {
    std::str::from_utf8(field).ok()?.trim().parse().ok()
}

/// Reads numeric rows from the CSV file at `path`.
///
/// # Errors
///
/// - `LoaderError::Open` if the file cannot be opened
/// - `LoaderError::Csv` if the underlying reader fails
pub fn import_market_data(path: impl AsRef<Path>) -> Result<MarketData, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let mut values = Vec::with_capacity(record.len());
        for field in record.iter() {
            match parse_field(field) {
                Some(value) => values.push(value),
                None => {
                    skipped += 1;
                    let value = String::from_utf8_lossy(field);
                    warn!(line, value = %value, "Skipping invalid value in market data");
                }
            }
        }

        if !values.is_empty() {
            rows.push(values);
        }
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        skipped,
        "Market data loaded"
    );

    Ok(MarketData { rows })
}
