//! Error types for the CSV adapters.

use std::path::PathBuf;
use thiserror::Error;

/// CSV adapter error.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be opened or created.
    #[error("Failed to open file {}: {source}", path.display())]
    Open {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written or moved into place.
    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_loader_error_display() {
        let err = LoaderError::Open {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("Failed to open file missing.csv"));

        let err = LoaderError::Write {
            path: PathBuf::from("out.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.csv"));
        assert!(err.to_string().contains("denied"));
    }
}
