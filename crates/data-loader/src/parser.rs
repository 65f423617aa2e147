//! Parser for the movie database JSON file.
//!
//! Expected layout:
//!
//! ```text
//! {
//!   "movies":          [{ "movie_id": 1, "title": "...", "release_year": "1999", "box_office": "1000" }],
//!   "authors":         [{ "author_id": 1, "author_name": "..." }],
//!   "countries":       [{ "country_id": 1, "country_name": "..." }],
//!   "movie_authors":   [{ "movie_id": 1, "author_id": 1 }],
//!   "movie_countries": [{ "movie_id": 1, "country_id": 1 }]
//! }
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::RawDataset;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Read and deserialize the data file at `path`.
pub fn parse_dataset(path: &Path) -> Result<RawDataset> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            DataLoadError::IoError(e.into())
        } else {
            DataLoadError::malformed(path.display().to_string(), e)
        }
    })
}

/// Deserialize an in-memory document. `source` names it in error messages.
pub fn parse_dataset_str(source: &str, contents: &str) -> Result<RawDataset> {
    serde_json::from_str(contents).map_err(|e| DataLoadError::malformed(source, e))
}
