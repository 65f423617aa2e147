//! The filtered and sorted projection of the base collection.

use data_loader::{Dataset, Movie, MovieId};

/// Ordered positions into [`Dataset::movies`].
///
/// The Filter Engine replaces it wholesale; the Sort Engine reorders it in
/// place. Positions are only meaningful for the dataset that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    positions: Vec<usize>,
}

impl ViewState {
    /// Every movie in base order
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            positions: (0..dataset.len()).collect(),
        }
    }

    pub fn from_positions(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut Vec<usize> {
        &mut self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The movies in view order
    pub fn movies<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Movie> + 'a {
        self.positions
            .iter()
            .filter_map(move |&pos| dataset.get_movie(pos))
    }

    pub fn movie_ids(&self, dataset: &Dataset) -> Vec<MovieId> {
        self.movies(dataset).map(|m| m.movie_id).collect()
    }
}
