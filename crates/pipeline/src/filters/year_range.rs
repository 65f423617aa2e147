//! Inclusive release-year range.

use crate::traits::Filter;
use data_loader::{Movie, Relations};

/// Keeps movies with `from <= release_year <= to`.
///
/// A NaN release year never satisfies the range.
pub struct YearRangeFilter {
    from: i64,
    to: i64,
}

impl YearRangeFilter {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, movie: &Movie, _relations: &Relations) -> bool {
        movie.release_year.within(self.from, self.to)
    }
}
