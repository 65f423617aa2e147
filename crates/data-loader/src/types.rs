//! Core domain types for the movie database.
//!
//! The source file is relational: movies, authors and countries live in
//! their own tables and are joined through two link tables. Raw records
//! mirror the file; [`Movie`] and [`Dataset`] are the normalized forms the
//! rest of the workspace works with.

use crate::numeric::{Numeric, RawNumber};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for an author (directors are stored as authors)
pub type AuthorId = u32;

/// Unique identifier for a country
pub type CountryId = u32;

// =============================================================================
// Raw records (as stored in the JSON file)
// =============================================================================

/// A movie exactly as it appears in the `movies` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(default)]
    pub release_year: Option<RawNumber>,
    #[serde(default)]
    pub box_office: Option<RawNumber>,
    /// Any other columns, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub author_id: AuthorId,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub country_id: CountryId,
    pub country_name: String,
}

/// Edge of the movie/author many-to-many relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MovieAuthorLink {
    pub movie_id: MovieId,
    pub author_id: AuthorId,
}

/// Edge of the movie/country many-to-many relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MovieCountryLink {
    pub movie_id: MovieId,
    pub country_id: CountryId,
}

/// The whole data file. Missing tables deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub movies: Vec<RawMovie>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub movie_authors: Vec<MovieAuthorLink>,
    #[serde(default)]
    pub movie_countries: Vec<MovieCountryLink>,
}

// =============================================================================
// Normalized types
// =============================================================================

/// A movie with its numeric columns coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub release_year: Numeric,
    pub box_office: Numeric,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Build a movie with no extra columns. Mostly useful in tests.
    pub fn new(
        movie_id: MovieId,
        title: impl Into<String>,
        release_year: Numeric,
        box_office: Numeric,
    ) -> Self {
        Self {
            movie_id,
            title: title.into(),
            release_year,
            box_office,
            extra: Map::new(),
        }
    }
}

/// Which joined relation a lookup refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Directors,
    Countries,
}

/// One-to-many lookup from a movie to display names, in link-table order.
///
/// A movie without any resolved link has no entry at all. That is not the
/// same as an entry holding a single empty name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkIndex {
    pub(crate) names: HashMap<MovieId, Vec<String>>,
}

/// Both relation indices built from the link tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relations {
    pub directors: LinkIndex,
    pub countries: LinkIndex,
}

/// Size of each table in the source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub movies: usize,
    pub authors: usize,
    pub countries: usize,
    pub movie_authors: usize,
    pub movie_countries: usize,
}

/// The loaded, immutable database: base collection plus relation indices.
///
/// Nothing in here changes after [`Dataset::from_raw`] returns; filtering
/// and sorting work on positions into [`Dataset::movies`].
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) movies: Vec<Movie>,
    pub(crate) relations: Relations,
    pub(crate) table_counts: TableCounts,
}

impl Dataset {
    /// The base collection, in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    pub fn table_counts(&self) -> TableCounts {
        self.table_counts
    }

    pub fn get_movie(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
