//! Case-insensitive substring match on joined director or country names.

use crate::traits::Filter;
use data_loader::{Movie, Relation, Relations};

/// Keeps movies whose joined names (`"A, B"`) contain the query.
///
/// A movie with no entry in the relation index is matched against the
/// empty string, so it only survives an empty query.
pub struct RelationFilter {
    relation: Relation,
    needle: String,
}

impl RelationFilter {
    pub fn new(relation: Relation, query: &str) -> Self {
        Self {
            relation,
            needle: query.to_lowercase(),
        }
    }

    pub fn directors(query: &str) -> Self {
        Self::new(Relation::Directors, query)
    }

    pub fn countries(query: &str) -> Self {
        Self::new(Relation::Countries, query)
    }
}

impl Filter for RelationFilter {
    fn name(&self) -> &str {
        match self.relation {
            Relation::Directors => "DirectorFilter",
            Relation::Countries => "CountryFilter",
        }
    }

    fn matches(&self, movie: &Movie, relations: &Relations) -> bool {
        let joined = relations
            .get(self.relation)
            .joined(movie.movie_id)
            .unwrap_or_default();
        joined.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Numeric;

    fn create_test_relations() -> Relations {
        let mut relations = Relations::default();
        relations.directors.insert(1, ["Jane Doe", "John Roe"]);
        relations.countries.insert(1, ["France"]);
        relations
    }

    fn movie(id: u32) -> Movie {
        Movie::new(id, "Untitled", Numeric::new(2000), Numeric::new(0))
    }

    #[test]
    fn test_matches_any_joined_name() {
        let relations = create_test_relations();

        assert!(RelationFilter::directors("jane").matches(&movie(1), &relations));
        assert!(RelationFilter::directors("ROE").matches(&movie(1), &relations));
        assert!(RelationFilter::directors("doe, john").matches(&movie(1), &relations));
        assert!(!RelationFilter::directors("smith").matches(&movie(1), &relations));
    }

    #[test]
    fn test_missing_entry_only_matches_empty_query() {
        let relations = create_test_relations();

        assert!(RelationFilter::countries("").matches(&movie(2), &relations));
        assert!(!RelationFilter::countries("fr").matches(&movie(2), &relations));
        assert!(RelationFilter::countries("fr").matches(&movie(1), &relations));
    }
}
