//! Filter criteria and the raw control values they are read from.

use data_loader::Numeric;
use std::str::FromStr;
use thiserror::Error;

/// Lower year bound used when none is given
pub const DEFAULT_YEAR_FROM: i64 = 1900;

/// Upper year bound used when none is given
pub const DEFAULT_YEAR_TO: i64 = 2100;

/// What the Filter Engine matches against.
///
/// String fields are case-insensitive substrings; empty matches everything.
/// Absent year bounds fall back to [`DEFAULT_YEAR_FROM`] and
/// [`DEFAULT_YEAR_TO`], which still exclude movies whose year is NaN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub director: String,
    pub country: String,
    pub year_from: Option<i64>,
    pub year_to: Option<i64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn years(mut self, from: Option<i64>, to: Option<i64>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    /// Effective inclusive year range
    pub fn year_bounds(&self) -> (i64, i64) {
        (
            self.year_from.unwrap_or(DEFAULT_YEAR_FROM),
            self.year_to.unwrap_or(DEFAULT_YEAR_TO),
        )
    }
}

/// One of the five filter controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterControl {
    Title,
    Director,
    Country,
    YearFrom,
    YearTo,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter '{0}' (expected one of: title, director, country, from, to)")]
pub struct ParseControlError(pub String);

impl FromStr for FilterControl {
    type Err = ParseControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(FilterControl::Title),
            "director" | "directors" => Ok(FilterControl::Director),
            "country" | "countries" => Ok(FilterControl::Country),
            "from" | "year_from" | "year-from" => Ok(FilterControl::YearFrom),
            "to" | "year_to" | "year-to" => Ok(FilterControl::YearTo),
            _ => Err(ParseControlError(s.to_string())),
        }
    }
}

/// Current text of every filter control, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub title: String,
    pub director: String,
    pub country: String,
    pub year_from: String,
    pub year_to: String,
}

impl FilterInputs {
    pub fn set(&mut self, control: FilterControl, value: impl Into<String>) {
        let value = value.into();
        match control {
            FilterControl::Title => self.title = value,
            FilterControl::Director => self.director = value,
            FilterControl::Country => self.country = value,
            FilterControl::YearFrom => self.year_from = value,
            FilterControl::YearTo => self.year_to = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Read the controls into criteria.
    ///
    /// Year inputs use the same prefix parsing as the data file. A value
    /// that parses to NaN or to zero counts as absent.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title: self.title.clone(),
            director: self.director.clone(),
            country: self.country.clone(),
            year_from: parse_year_input(&self.year_from),
            year_to: parse_year_input(&self.year_to),
        }
    }
}

fn parse_year_input(input: &str) -> Option<i64> {
    Numeric::parse(input).value().filter(|&year| year != 0)
}
