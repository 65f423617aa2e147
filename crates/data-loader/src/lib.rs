//! # Data Loader Crate
//!
//! Loads the relational movie database and turns it into an immutable
//! [`Dataset`]: the base collection of movies plus director and country
//! lookups built from the link tables.
//!
//! ## Main Components
//!
//! - **types**: Raw and normalized records, [`Dataset`], [`Relations`]
//! - **numeric**: [`Numeric`], an integer that may be not-a-number
//! - **parser**: JSON file parsing
//! - **normalize**: Raw movie rows to [`Movie`]
//! - **index**: Relation indexing and dataset assembly
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, Relation};
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/movies_database.json"))?;
//! let first = &dataset.movies()[0];
//! let directors = dataset.relations().get(Relation::Directors).joined(first.movie_id);
//! println!("{} by {}", first.title, directors.unwrap_or_else(|| "N/A".into()));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod numeric;
pub mod parser;
pub mod normalize;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use numeric::{Numeric, RawNumber};
pub use types::{
    // Type aliases
    MovieId,
    AuthorId,
    CountryId,
    // Records
    RawMovie,
    RawDataset,
    Movie,
    Author,
    Country,
    MovieAuthorLink,
    MovieCountryLink,
    // Indices
    Relation,
    LinkIndex,
    Relations,
    Dataset,
    TableCounts,
};
