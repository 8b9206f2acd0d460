// File: crates/movie-data/src/lib.rs
// Summary: Pipeline entry point; exports record coercion, year filters, loading and aggregation.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;

pub use aggregate::{aggregate, aggregate_normalized, Aggregation, YearlyAggregate};
pub use error::{DataError, Result};
pub use filter::{qualifies, Variant, YearFilter};
pub use loader::{load_csv, read_records, LoadedRecords};
pub use record::{NormalizedRecord, RawRecord};
