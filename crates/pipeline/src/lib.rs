//! Filter and sort engine for the movie table.
//!
//! This crate provides:
//! - Filter trait and implementations, one per filter control
//! - FilterPipeline for composing filters over the base collection
//! - Sort Engine: typed per-column comparators and per-column toggles
//! - ViewState, the filtered/sorted projection that gets rendered
//!
//! ## Architecture
//! The base collection in a [`data_loader::Dataset`] never changes.
//! 1. Filtering recomputes a [`ViewState`] from scratch, in base order
//! 2. Sorting reorders that view in place
//! 3. The view is handed to a renderer
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_filters, apply_sort, FilterCriteria, SortColumn, SortOrder};
//!
//! let criteria = FilterCriteria::new().director("nolan").years(Some(2000), None);
//! let mut view = apply_filters(&dataset, &criteria);
//! apply_sort(&mut view, &dataset, SortColumn::BoxOffice, SortOrder::Descending);
//! ```

pub mod traits;
pub mod criteria;
pub mod view;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;

// Re-export main types
pub use traits::Filter;
pub use criteria::{
    FilterControl, FilterCriteria, FilterInputs, ParseControlError, DEFAULT_YEAR_FROM,
    DEFAULT_YEAR_TO,
};
pub use view::ViewState;
pub use filter_pipeline::{apply_filters, FilterPipeline};
pub use sort::{
    apply_sort, ColumnKind, ParseColumnError, SortColumn, SortOrder, SortToggles,
};
