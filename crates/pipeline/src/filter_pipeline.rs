//! The FilterPipeline chains filters over the base collection.
//!
//! This is the Filter Engine: it always starts from the full dataset, so
//! the resulting [`ViewState`] keeps base order and drops any earlier sort.

use crate::criteria::FilterCriteria;
use crate::filters::{RelationFilter, TitleFilter, YearRangeFilter};
use crate::traits::Filter;
use crate::view::ViewState;
use data_loader::Dataset;
use tracing;

/// Chains multiple filters together; a movie is kept only if every filter
/// matches it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(YearRangeFilter::new(1990, 2000))
///     .add_filter(TitleFilter::new("war"));
///
/// let view = pipeline.apply(&dataset);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of criteria.
    ///
    /// The year range goes first since it is the cheapest check and is
    /// always active. Empty text criteria match everything and are left
    /// out.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let (from, to) = criteria.year_bounds();
        let mut pipeline = Self::new().add_filter(YearRangeFilter::new(from, to));

        if !criteria.title.is_empty() {
            pipeline = pipeline.add_filter(TitleFilter::new(&criteria.title));
        }
        if !criteria.director.is_empty() {
            pipeline = pipeline.add_filter(RelationFilter::directors(&criteria.director));
        }
        if !criteria.country.is_empty() {
            pipeline = pipeline.add_filter(RelationFilter::countries(&criteria.country));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the whole dataset.
    ///
    /// ## Algorithm
    /// 1. Start with every position in base order
    /// 2. For each filter in order, retain the matching positions
    /// 3. Return the survivors as a new view
    ///
    /// `retain` keeps relative order, so the result is a stable filter.
    pub fn apply(&self, dataset: &Dataset) -> ViewState {
        let movies = dataset.movies();
        let relations = dataset.relations();

        let mut current: Vec<usize> = (0..movies.len()).collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|&pos| filter.matches(&movies[pos], relations));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        ViewState::from_positions(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Recompute the view for `criteria` from the full dataset.
pub fn apply_filters(dataset: &Dataset, criteria: &FilterCriteria) -> ViewState {
    FilterPipeline::from_criteria(criteria).apply(dataset)
}
