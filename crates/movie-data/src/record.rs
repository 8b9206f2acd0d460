// File: crates/movie-data/src/record.rs
// Summary: Raw CSV rows and their normalized, typed form.
// Notes:
// - Every numeric field coerces to `Option`: `None` covers empty cells, absent
//   columns and text that is not a finite number. Zero stays `Some(0.0)`.

use serde::Deserialize;

/// One CSV row, untyped. Columns other than these four are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(default)]
    pub imdb_score: Option<String>,
    #[serde(default)]
    pub title_year: Option<String>,
    #[serde(default)]
    pub director_name: Option<String>,
    #[serde(default)]
    pub gross: Option<String>,
}

impl RawRecord {
    /// Convenience constructor for the two fields aggregation reads.
    pub fn new(year: &str, gross: &str) -> Self {
        Self {
            title_year: Some(year.to_string()),
            gross: Some(gross.to_string()),
            ..Self::default()
        }
    }

    pub fn normalize(&self) -> NormalizedRecord {
        NormalizedRecord {
            score: parse_number(self.imdb_score.as_deref()),
            year: parse_year(self.title_year.as_deref()),
            director: self.director_name.as_deref().unwrap_or("").trim().to_string(),
            gross: parse_number(self.gross.as_deref()),
        }
    }
}

/// Typed view of a [`RawRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRecord {
    pub score: Option<f64>,
    pub year: Option<i32>,
    pub director: String,
    pub gross: Option<f64>,
}

impl NormalizedRecord {
    pub fn new(year: i32, gross: f64) -> Self {
        Self { score: None, year: Some(year), director: String::new(), gross: Some(gross) }
    }
}

/// Parse trimmed text as a finite float.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a year; accepts integral floats such as `"2010.0"`.
pub fn parse_year(raw: Option<&str>) -> Option<i32> {
    let v = parse_number(raw)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}
