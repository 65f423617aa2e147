//! Single-column sorting of the view.
//!
//! Every column resolves once per sort to a [`ColumnKind`], so a whole sort
//! runs with one typed comparator instead of inspecting each value.
//!
//! ## Known limitation
//! A NaN year or box office has no meaningful position. It is placed after
//! every number when ascending, and before them when descending.

use crate::view::ViewState;
use data_loader::{Dataset, Movie, Numeric, Relations};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Columns the table can be sorted by.
///
/// `Director` and `Country` are derived: they sort by the joined display
/// names, with movies lacking an entry treated as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Title,
    ReleaseYear,
    BoxOffice,
    Director,
    Country,
}

/// How a column's values are compared
#[derive(Clone, Copy)]
pub enum ColumnKind {
    /// Compared case-insensitively
    Text(for<'a> fn(&'a Movie, &'a Relations) -> Cow<'a, str>),
    /// Compared numerically with NaN last
    Integer(fn(&Movie) -> Numeric),
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Title,
        SortColumn::ReleaseYear,
        SortColumn::BoxOffice,
        SortColumn::Director,
        SortColumn::Country,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::ReleaseYear => "release_year",
            SortColumn::BoxOffice => "box_office",
            SortColumn::Director => "director",
            SortColumn::Country => "country",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            SortColumn::Title => ColumnKind::Text(title_text),
            SortColumn::Director => ColumnKind::Text(director_text),
            SortColumn::Country => ColumnKind::Text(country_text),
            SortColumn::ReleaseYear => ColumnKind::Integer(|m: &Movie| m.release_year),
            SortColumn::BoxOffice => ColumnKind::Integer(|m: &Movie| m.box_office),
        }
    }
}

fn title_text<'a>(movie: &'a Movie, _relations: &'a Relations) -> Cow<'a, str> {
    Cow::Borrowed(&movie.title)
}

fn director_text<'a>(movie: &'a Movie, relations: &'a Relations) -> Cow<'a, str> {
    Cow::Owned(relations.directors.joined(movie.movie_id).unwrap_or_default())
}

fn country_text<'a>(movie: &'a Movie, relations: &'a Relations) -> Cow<'a, str> {
    Cow::Owned(relations.countries.joined(movie.movie_id).unwrap_or_default())
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort column '{0}' (expected one of: title, release_year, box_office, director, country)")]
pub struct ParseColumnError(pub String);

impl FromStr for SortColumn {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortColumn::Title),
            "release_year" | "release-year" | "year" => Ok(SortColumn::ReleaseYear),
            "box_office" | "box-office" | "boxoffice" => Ok(SortColumn::BoxOffice),
            "director" | "directors" => Ok(SortColumn::Director),
            "country" | "countries" => Ok(SortColumn::Country),
            _ => Err(ParseColumnError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last order used per column. Columns start unset and flip independently.
#[derive(Debug, Clone, Default)]
pub struct SortToggles {
    orders: HashMap<SortColumn, SortOrder>,
}

impl SortToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `column` and return its new order. The first toggle is ascending.
    pub fn toggle(&mut self, column: SortColumn) -> SortOrder {
        let next = match self.orders.get(&column) {
            Some(order) => order.toggled(),
            None => SortOrder::Ascending,
        };
        self.orders.insert(column, next);
        next
    }

    pub fn current(&self, column: SortColumn) -> Option<SortOrder> {
        self.orders.get(&column).copied()
    }
}

/// Reorder `view` by `column`. Membership is unchanged, except that
/// positions outside the dataset are dropped.
///
/// Keys are computed once per movie. The sort is stable, so movies with
/// equal keys keep their current relative order in both directions.
pub fn apply_sort(view: &mut ViewState, dataset: &Dataset, column: SortColumn, order: SortOrder) {
    let movies = dataset.movies();
    let relations = dataset.relations();
    let positions = view.positions_mut();

    match column.kind() {
        ColumnKind::Text(text) => sort_by_key(
            positions,
            order,
            |pos| movies.get(pos).map(|m| text(m, relations).to_lowercase()),
            |a, b| a.cmp(b),
        ),
        ColumnKind::Integer(number) => sort_by_key(
            positions,
            order,
            |pos| movies.get(pos).map(number),
            |a, b| a.sort_cmp(*b),
        ),
    }

    tracing::debug!("Sorted {} movies by {} in {} order", positions.len(), column, order);
}

fn sort_by_key<K>(
    positions: &mut Vec<usize>,
    order: SortOrder,
    key: impl Fn(usize) -> Option<K>,
    compare: impl Fn(&K, &K) -> Ordering,
) {
    let mut keyed: Vec<(K, usize)> = positions
        .iter()
        .filter_map(|&pos| key(pos).map(|k| (k, pos)))
        .collect();
    keyed.sort_by(|a, b| order.apply(compare(&a.0, &b.0)));

    positions.clear();
    positions.extend(keyed.into_iter().map(|(_, pos)| pos));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> Dataset {
        let mut relations = Relations::default();
        relations.directors.insert(1, ["zoe"]);
        relations.directors.insert(2, ["Adam"]);
        relations.countries.insert(3, ["Chile"]);

        Dataset::from_parts(
            vec![
                Movie::new(1, "alpha", Numeric::new(2000), Numeric::new(100)),
                Movie::new(2, "Beta", Numeric::NAN, Numeric::new(500)),
                Movie::new(3, "ALPHA", Numeric::new(1990), Numeric::new(300)),
            ],
            relations,
        )
    }

    fn sorted(column: SortColumn, order: SortOrder) -> Vec<u32> {
        let dataset = create_test_dataset();
        let mut view = ViewState::full(&dataset);
        apply_sort(&mut view, &dataset, column, order);
        view.movie_ids(&dataset)
    }

    #[test]
    fn test_integer_column() {
        assert_eq!(sorted(SortColumn::BoxOffice, SortOrder::Ascending), vec![1, 3, 2]);
        assert_eq!(sorted(SortColumn::BoxOffice, SortOrder::Descending), vec![2, 3, 1]);
    }

    #[test]
    fn test_nan_sorts_last_ascending() {
        assert_eq!(sorted(SortColumn::ReleaseYear, SortOrder::Ascending), vec![3, 1, 2]);
        assert_eq!(sorted(SortColumn::ReleaseYear, SortOrder::Descending), vec![2, 1, 3]);
    }

    #[test]
    fn test_text_ties_keep_current_order() {
        // "alpha" and "ALPHA" are equal ignoring case
        assert_eq!(sorted(SortColumn::Title, SortOrder::Ascending), vec![1, 3, 2]);
        assert_eq!(sorted(SortColumn::Title, SortOrder::Descending), vec![2, 1, 3]);
    }

    #[test]
    fn test_derived_columns() {
        // Movie 3 has no director and sorts as ""
        assert_eq!(sorted(SortColumn::Director, SortOrder::Ascending), vec![3, 2, 1]);
        assert_eq!(sorted(SortColumn::Country, SortOrder::Descending), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggles_are_per_column() {
        let mut toggles = SortToggles::new();
        assert_eq!(toggles.current(SortColumn::Title), None);
        assert_eq!(toggles.toggle(SortColumn::Title), SortOrder::Ascending);
        assert_eq!(toggles.toggle(SortColumn::Title), SortOrder::Descending);
        assert_eq!(toggles.toggle(SortColumn::BoxOffice), SortOrder::Ascending);
        assert_eq!(toggles.toggle(SortColumn::Title), SortOrder::Ascending);
        assert_eq!(toggles.current(SortColumn::BoxOffice), Some(SortOrder::Ascending));
    }

    #[test]
    fn test_positions_outside_dataset_are_dropped() {
        let dataset = create_test_dataset();
        let mut view = ViewState::from_positions(vec![2, 7, 0]);

        apply_sort(&mut view, &dataset, SortColumn::Title, SortOrder::Ascending);
        assert_eq!(view.positions(), &[2, 0]);

        let mut view = ViewState::from_positions(vec![9, 1]);
        apply_sort(&mut view, &dataset, SortColumn::BoxOffice, SortOrder::Descending);
        assert_eq!(view.movie_ids(&dataset), vec![2]);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("year".parse::<SortColumn>(), Ok(SortColumn::ReleaseYear));
        assert_eq!("Box_Office".parse::<SortColumn>(), Ok(SortColumn::BoxOffice));
        assert!("rating".parse::<SortColumn>().is_err());
        for column in SortColumn::ALL {
            assert_eq!(column.name().parse::<SortColumn>(), Ok(column));
        }
    }
}
