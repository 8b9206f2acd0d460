// File: crates/movie-data/src/filter.rs
// Summary: Row qualification rules and the two dataset variants.

use crate::record::NormalizedRecord;

/// Which release years may contribute to the aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearFilter {
    /// Any known, non-zero year.
    Present,
    /// Known, non-zero and at least the given year.
    Since(i32),
}

impl YearFilter {
    pub fn accepts(&self, year: Option<i32>) -> bool {
        match (self, year) {
            (_, None) | (_, Some(0)) => false,
            (YearFilter::Present, Some(_)) => true,
            (YearFilter::Since(min), Some(y)) => y >= *min,
        }
    }
}

/// A record contributes to the totals iff it has a positive gross and an accepted year.
pub fn qualifies(record: &NormalizedRecord, filter: YearFilter) -> bool {
    matches!(record.gross, Some(g) if g > 0.0) && filter.accepts(record.year)
}

/// The two dataset presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    AllYears,
    Since2010,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::AllYears, Variant::Since2010];

    pub fn filter(&self) -> YearFilter {
        match self {
            Variant::AllYears => YearFilter::Present,
            Variant::Since2010 => YearFilter::Since(2010),
        }
    }

    /// Short name used on the command line and in output file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Variant::AllYears => "all-years",
            Variant::Since2010 => "since-2010",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug().eq_ignore_ascii_case(s))
    }
}
