//! Core traits for the filtering pipeline.
//!
//! A [`Filter`] is a single predicate over one movie. The
//! [`crate::FilterPipeline`] ANDs them together over the base collection.

use data_loader::{Movie, Relations};

/// Core trait for filtering movies.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared if needed
/// - Filters never fail: malformed data is simply not matched
/// - `relations` gives access to the joined director/country names
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` should stay in the view.
    fn matches(&self, movie: &Movie, relations: &Relations) -> bool;
}
