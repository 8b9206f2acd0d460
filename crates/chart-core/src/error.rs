// File: crates/chart-core/src/error.rs
// Summary: Errors raised while building or writing a chart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// No series holds a single point, so no scale domain exists.
    #[error("nothing to plot: every series is empty")]
    EmptySeries,

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
