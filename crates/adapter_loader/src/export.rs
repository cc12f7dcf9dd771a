//! Per-path result export.
//!
//! Writes one row per recorded path after a header line
//! `Simulation,OptionPrice`. Indices are 1-based.
//!
//! The rows go to a hidden sibling file first, which is renamed over the
//! target only once everything is flushed. A failed export leaves the
//! target untouched.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::LoaderError;

/// Header line of an export file.
pub const EXPORT_HEADER: &str = "Simulation,OptionPrice";

#[derive(Serialize)]
struct ExportRow {
    #[serde(rename = "Simulation")]
    simulation: usize,
    #[serde(rename = "OptionPrice")]
    option_price: f64,
}

fn staging_path(target: &Path) -> Result<PathBuf, LoaderError> {
    let file_name = target.file_name().ok_or_else(|| LoaderError::Open {
        path: target.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(file_name);
    staged.push(".tmp");
    Ok(target.with_file_name(staged))
}

fn write_rows(staged: &Path, path_prices: &[f64]) -> Result<(), LoaderError> {
    let file = File::create(staged).map_err(|source| LoaderError::Open {
        path: staged.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for (i, &option_price) in path_prices.iter().enumerate() {
        writer.serialize(ExportRow {
            simulation: i + 1,
            option_price,
        })?;
    }
    // serialize() emits the header with the first row
    if path_prices.is_empty() {
        writer.write_record(["Simulation", "OptionPrice"])?;
    }

    writer.flush().map_err(|source| LoaderError::Write {
        path: staged.to_path_buf(),
        source,
    })
}

/// Writes recorded per-path prices to `path` as CSV.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// - `LoaderError::Open` if the file cannot be created
/// - `LoaderError::Write` if it cannot be flushed or moved into place
/// - `LoaderError::Csv` if a record cannot be serialised
pub fn export_results(path: impl AsRef<Path>, path_prices: &[f64]) -> Result<usize, LoaderError> {
    let target = path.as_ref();
    let staged = staging_path(target)?;

    if let Err(err) = write_rows(&staged, path_prices) {
        let _ = fs::remove_file(&staged);
        return Err(err);
    }

    fs::rename(&staged, target).map_err(|source| {
        let _ = fs::remove_file(&staged);
        LoaderError::Write {
            path: target.to_path_buf(),
            source,
        }
    })?;

    debug!(staged = %staged.display(), "Export staged file moved into place");
    info!(
        path = %target.display(),
        rows = path_prices.len(),
        "Results exported"
    );

    Ok(path_prices.len())
}
