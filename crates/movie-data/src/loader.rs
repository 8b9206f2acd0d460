// File: crates/movie-data/src/loader.rs
// Summary: Read movie rows from CSV, skipping rows the reader cannot decode.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{DataError, Result};
use crate::record::RawRecord;

/// Columns the pipeline reads; their absence is logged, not fatal.
pub const REQUIRED_COLUMNS: [&str; 4] = ["imdb_score", "title_year", "director_name", "gross"];

/// Rows read from a CSV source.
#[derive(Clone, Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<RawRecord>,
    /// Rows dropped because they could not be decoded.
    pub skipped: usize,
}

/// Load every row of the CSV file at `path`.
pub fn load_csv(path: &Path) -> Result<LoadedRecords> {
    let rdr = builder()
        .from_path(path)
        .map_err(|source| DataError::Open { path: path.to_path_buf(), source })?;
    let loaded = read_from(rdr)?;
    info!(
        path = %path.display(),
        rows = loaded.records.len(),
        skipped = loaded.skipped,
        "loaded movie rows"
    );
    Ok(loaded)
}

/// Load every row from any reader producing CSV text with a header row.
pub fn read_records<R: Read>(reader: R) -> Result<LoadedRecords> {
    read_from(builder().from_reader(reader))
}

fn builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).flexible(true).trim(csv::Trim::Headers);
    b
}

fn read_from<R: Read>(mut rdr: csv::Reader<R>) -> Result<LoadedRecords> {
    let headers = rdr.headers().map_err(DataError::Header)?.clone();
    debug!(?headers, "csv headers");
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            warn!(column = col, "column missing; its values will be treated as empty");
        }
    }

    let mut out = LoadedRecords::default();
    for (i, row) in rdr.deserialize::<RawRecord>().enumerate() {
        match row {
            Ok(rec) => out.records.push(rec),
            Err(e) => {
                // line numbers are 1-based and the header is line 1
                warn!(line = i + 2, error = %e, "skipping malformed row");
                out.skipped += 1;
            }
        }
    }
    Ok(out)
}
