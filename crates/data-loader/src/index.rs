//! Dataset building and relation indexing.
//!
//! Loading runs once per session:
//! 1. Parse the JSON file into a [`RawDataset`]
//! 2. Build the director and country indices from the link tables
//! 3. Normalize the movie rows into the base collection

use crate::error::Result;
use crate::normalize::normalize_movies;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

impl Dataset {
    /// Load and index the database file at `path`.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie database from {}", path.display());
        let raw = parser::parse_dataset(path)?;
        let dataset = Dataset::from_raw(raw);

        let counts = dataset.table_counts();
        info!(
            "Loaded {} movies, {} authors, {} countries ({} director links, {} country links)",
            counts.movies,
            counts.authors,
            counts.countries,
            counts.movie_authors,
            counts.movie_countries
        );
        Ok(dataset)
    }

    /// Build the immutable dataset from already-parsed tables.
    pub fn from_raw(raw: RawDataset) -> Self {
        let table_counts = TableCounts {
            movies: raw.movies.len(),
            authors: raw.authors.len(),
            countries: raw.countries.len(),
            movie_authors: raw.movie_authors.len(),
            movie_countries: raw.movie_countries.len(),
        };

        let relations = Relations::build(
            &raw.authors,
            &raw.countries,
            &raw.movie_authors,
            &raw.movie_countries,
        );
        let movies = normalize_movies(raw.movies);

        Self {
            movies,
            relations,
            table_counts,
        }
    }

    /// Build a dataset directly from normalized parts.
    pub fn from_parts(movies: Vec<Movie>, relations: Relations) -> Self {
        let table_counts = TableCounts {
            movies: movies.len(),
            ..TableCounts::default()
        };
        Self {
            movies,
            relations,
            table_counts,
        }
    }
}

impl Relations {
    /// Build both indices. Links whose author or country is unknown are skipped.
    pub fn build(
        authors: &[Author],
        countries: &[Country],
        movie_authors: &[MovieAuthorLink],
        movie_countries: &[MovieCountryLink],
    ) -> Self {
        let author_names = name_table(authors.iter().map(|a| (a.author_id, a.author_name.as_str())));
        let country_names =
            name_table(countries.iter().map(|c| (c.country_id, c.country_name.as_str())));

        let directors = LinkIndex::build(
            movie_authors.iter().map(|l| (l.movie_id, l.author_id)),
            &author_names,
        );
        let countries = LinkIndex::build(
            movie_countries.iter().map(|l| (l.movie_id, l.country_id)),
            &country_names,
        );

        debug!(
            "Indexed directors for {} movies, countries for {} movies",
            directors.len(),
            countries.len()
        );

        Self { directors, countries }
    }

    pub fn get(&self, relation: Relation) -> &LinkIndex {
        match relation {
            Relation::Directors => &self.directors,
            Relation::Countries => &self.countries,
        }
    }
}

impl LinkIndex {
    /// Resolve each `(movie, target)` edge through `names` and group by movie.
    ///
    /// Iteration order of `links` is the order names appear per movie.
    /// Duplicate edges produce duplicate names.
    pub fn build(
        links: impl IntoIterator<Item = (MovieId, u32)>,
        names: &HashMap<u32, &str>,
    ) -> Self {
        let mut index: HashMap<MovieId, Vec<String>> = HashMap::new();
        for (movie_id, target) in links {
            if let Some(name) = names.get(&target) {
                index
                    .entry(movie_id)
                    .or_insert_with(Vec::new)
                    .push((*name).to_string());
            }
        }
        Self { names: index }
    }

    /// Names linked to a movie, or `None` if it has no resolved links
    pub fn get(&self, movie_id: MovieId) -> Option<&[String]> {
        self.names.get(&movie_id).map(|v| v.as_slice())
    }

    /// Names joined with `", "`, or `None` if the movie has no entry
    pub fn joined(&self, movie_id: MovieId) -> Option<String> {
        self.get(movie_id).map(|names| names.join(", "))
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.names.contains_key(&movie_id)
    }

    /// Number of movies with at least one resolved name
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Insert names for a movie by hand, appending to any existing entry.
    pub fn insert(&mut self, movie_id: MovieId, names: impl IntoIterator<Item = impl Into<String>>) {
        self.names
            .entry(movie_id)
            .or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
    }
}

/// Id to name lookup. When an id repeats, the first row wins.
fn name_table<'a>(rows: impl Iterator<Item = (u32, &'a str)>) -> HashMap<u32, &'a str> {
    let mut table = HashMap::new();
    for (id, name) in rows {
        table.entry(id).or_insert(name);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(id: AuthorId, name: &str) -> Author {
        Author {
            author_id: id,
            author_name: name.to_string(),
        }
    }

    fn country(id: CountryId, name: &str) -> Country {
        Country {
            country_id: id,
            country_name: name.to_string(),
        }
    }

    fn directed(movie_id: MovieId, author_id: AuthorId) -> MovieAuthorLink {
        MovieAuthorLink { movie_id, author_id }
    }

    #[test]
    fn test_links_accumulate_in_table_order() {
        let authors = vec![author(1, "Lana"), author(2, "Lilly")];
        let links = vec![directed(10, 2), directed(10, 1), directed(11, 1)];

        let relations = Relations::build(&authors, &[], &links, &[]);

        assert_eq!(
            relations.directors.get(10),
            Some(&["Lilly".to_string(), "Lana".to_string()][..])
        );
        assert_eq!(relations.directors.joined(11).as_deref(), Some("Lana"));
    }

    #[test]
    fn test_duplicate_links_are_kept() {
        let authors = vec![author(1, "Jane Doe")];
        let links = vec![directed(1, 1), directed(1, 1)];

        let relations = Relations::build(&authors, &[], &links, &[]);
        assert_eq!(relations.directors.joined(1).as_deref(), Some("Jane Doe, Jane Doe"));
    }

    #[test]
    fn test_unknown_reference_is_skipped() {
        let authors = vec![author(1, "Jane Doe")];
        let links = vec![directed(1, 99), directed(2, 1)];

        let relations = Relations::build(&authors, &[], &links, &[]);

        assert!(!relations.directors.contains(1));
        assert!(relations.directors.get(1).is_none());
        assert_eq!(relations.directors.len(), 1);
    }

    #[test]
    fn test_missing_key_differs_from_empty_name() {
        let countries = vec![country(1, "")];
        let links = vec![MovieCountryLink {
            movie_id: 5,
            country_id: 1,
        }];

        let relations = Relations::build(&[], &countries, &[], &links);

        assert_eq!(relations.countries.get(5), Some(&[String::new()][..]));
        assert_eq!(relations.countries.get(6), None);
    }

    #[test]
    fn test_first_row_wins_for_repeated_ids() {
        let authors = vec![author(1, "First"), author(1, "Second")];
        let relations = Relations::build(&authors, &[], &[directed(1, 1)], &[]);
        assert_eq!(relations.directors.joined(1).as_deref(), Some("First"));
    }

    #[test]
    fn test_from_raw_counts_tables() {
        let raw = parser::parse_dataset_str(
            "inline",
            r#"{
                "movies": [
                    { "movie_id": 1, "title": "Alpha", "release_year": "2000", "box_office": "100" },
                    { "movie_id": 2, "title": "Beta", "release_year": "1995", "box_office": "500" }
                ],
                "authors": [{ "author_id": 1, "author_name": "Jane Doe" }],
                "movie_authors": [{ "movie_id": 1, "author_id": 1 }, { "movie_id": 2, "author_id": 4 }]
            }"#,
        )
        .unwrap();

        let dataset = Dataset::from_raw(raw);
        let counts = dataset.table_counts();

        assert_eq!(counts.movies, 2);
        assert_eq!(counts.movie_authors, 2);
        assert_eq!(dataset.relations().get(Relation::Directors).len(), 1);
        assert!(dataset.relations().get(Relation::Countries).is_empty());
        assert_eq!(dataset.movies()[1].title, "Beta");
    }
}
