//! Coerce raw movie rows into [`Movie`]s.

use crate::numeric::{Numeric, RawNumber};
use crate::types::{Movie, RawMovie};

/// Normalize every raw movie, keeping file order.
pub fn normalize_movies(raw: Vec<RawMovie>) -> Vec<Movie> {
    raw.into_iter().map(normalize_movie).collect()
}

/// `release_year` and `box_office` go through [`RawNumber::to_numeric`];
/// a missing or null value is NaN. Everything else is moved across as is.
pub fn normalize_movie(raw: RawMovie) -> Movie {
    Movie {
        movie_id: raw.movie_id,
        title: raw.title,
        release_year: coerce(raw.release_year.as_ref()),
        box_office: coerce(raw.box_office.as_ref()),
        extra: raw.extra,
    }
}

fn coerce(field: Option<&RawNumber>) -> Numeric {
    field.map(RawNumber::to_numeric).unwrap_or(Numeric::NAN)
}
