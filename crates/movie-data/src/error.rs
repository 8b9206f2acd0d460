// File: crates/movie-data/src/error.rs
// Summary: Errors raised while loading the movie dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the pipeline before aggregation starts.
///
/// Bad cells and undecodable rows never show up here; they are dropped by
/// the loader and the filter.
#[derive(Error, Debug)]
pub enum DataError {
    /// The CSV file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row could not be read.
    #[error("Failed to read CSV header: {0}")]
    Header(#[source] csv::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
