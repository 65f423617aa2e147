//! Filter implementations for the movie table.
//!
//! This module contains the concrete filters that a FilterPipeline is
//! built from, one per filter control.

pub mod relation_match;
pub mod title_match;
pub mod year_range;

// Re-export for convenience
pub use relation_match::RelationFilter;
pub use title_match::TitleFilter;
pub use year_range::YearRangeFilter;
