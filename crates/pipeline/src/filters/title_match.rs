//! Case-insensitive substring match on the movie title.

use crate::traits::Filter;
use data_loader::{Movie, Relations};

/// Keeps movies whose title contains the query, ignoring case.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, movie: &Movie, _relations: &Relations) -> bool {
        movie.title.to_lowercase().contains(&self.needle)
    }
}
