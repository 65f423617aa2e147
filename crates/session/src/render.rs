//! Denormalized rows and the renderers that display them.

use anyhow::{Context, Result};
use data_loader::{Dataset, LinkIndex, MovieId};
use pipeline::ViewState;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

/// Shown when a movie has no directors or countries
pub const NOT_AVAILABLE: &str = "N/A";

/// A display-ready table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub movie_id: MovieId,
    pub title: String,
    pub release_year: String,
    pub box_office: String,
    pub directors: String,
    pub countries: String,
    /// Source columns the table does not know about, in file order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keys a pass-through column may not shadow
const ROW_FIELDS: [&str; 6] = ["movie_id", "title", "release_year", "box_office", "directors", "countries"];

/// Resolve every movie in `view` into a [`DisplayRow`], in view order.
pub fn display_rows(dataset: &Dataset, view: &ViewState) -> Vec<DisplayRow> {
    let relations = dataset.relations();
    view.movies(dataset)
        .map(|movie| DisplayRow {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            release_year: movie.release_year.to_string(),
            box_office: movie.box_office.to_string(),
            directors: names_or_na(&relations.directors, movie.movie_id),
            countries: names_or_na(&relations.countries, movie.movie_id),
            extra: movie
                .extra
                .iter()
                .filter(|(key, _)| !ROW_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        })
        .collect()
}

/// Joined names, or `N/A` when there is no entry or the joined text is empty.
fn names_or_na(index: &LinkIndex, movie_id: MovieId) -> String {
    match index.joined(movie_id) {
        Some(joined) if !joined.is_empty() => joined,
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Displays a full set of rows. Each call replaces whatever was shown before.
pub trait Renderer {
    fn render(&mut self, rows: &[DisplayRow]) -> Result<()>;
}

const HEADERS: [&str; 5] = ["Title", "Year", "Box Office", "Directors", "Countries"];

/// Plain aligned text table with a row count footer
pub struct TextTableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextTableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextTableRenderer<W> {
    fn render(&mut self, rows: &[DisplayRow]) -> Result<()> {
        let cells: Vec<[&str; 5]> = rows
            .iter()
            .map(|r| {
                [
                    r.title.as_str(),
                    r.release_year.as_str(),
                    r.box_office.as_str(),
                    r.directors.as_str(),
                    r.countries.as_str(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(&mut self.out, &HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        write_line(&mut self.out, &rule, &widths)?;
        for row in &cells {
            write_line(&mut self.out, row, &widths)?;
        }

        let noun = if rows.len() == 1 { "movie" } else { "movies" };
        writeln!(self.out, "({} {})", rows.len(), noun).context("Failed to write table")?;
        self.out.flush().context("Failed to flush table output")
    }
}

fn write_line(out: &mut impl Write, cells: &[&str], widths: &[usize]) -> Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end()).context("Failed to write table")
}

/// Writes rows as a pretty-printed JSON array
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, rows: &[DisplayRow]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, rows).context("Failed to serialize rows")?;
        writeln!(self.out).context("Failed to write JSON output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, Numeric, Relations};

    fn create_test_dataset() -> Dataset {
        let mut relations = Relations::default();
        relations.directors.insert(1, ["Jane Doe", "John Roe"]);
        relations.countries.insert(2, [""]);

        Dataset::from_parts(
            vec![
                Movie::new(1, "Alpha", Numeric::new(2000), Numeric::new(100)),
                Movie::new(2, "Beta", Numeric::NAN, Numeric::new(500)),
            ],
            relations,
        )
    }

    #[test]
    fn test_display_rows_resolve_names() {
        let dataset = create_test_dataset();
        let rows = display_rows(&dataset, &ViewState::full(&dataset));

        assert_eq!(rows[0].directors, "Jane Doe, John Roe");
        assert_eq!(rows[0].countries, "N/A");
        assert_eq!(rows[1].directors, "N/A");
        assert_eq!(rows[1].release_year, "NaN");
    }

    #[test]
    fn test_empty_joined_name_renders_na() {
        let dataset = create_test_dataset();
        let rows = display_rows(&dataset, &ViewState::full(&dataset));
        assert_eq!(rows[1].countries, NOT_AVAILABLE);
    }

    #[test]
    fn test_text_table_layout() {
        let dataset = create_test_dataset();
        let rows = display_rows(&dataset, &ViewState::from_positions(vec![1]));

        let mut renderer = TextTableRenderer::new(Vec::new());
        renderer.render(&rows).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Title  Year  Box Office  Directors  Countries");
        assert_eq!(lines[1], "-----  ----  ----------  ---------  ---------");
        assert_eq!(lines[2], "Beta   NaN   500         N/A        N/A");
        assert_eq!(lines[3], "(1 movie)");
    }

    #[test]
    fn test_json_renderer() {
        let dataset = create_test_dataset();
        let rows = display_rows(&dataset, &ViewState::full(&dataset));

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

        assert_eq!(value[0]["title"], "Alpha");
        assert_eq!(value[1]["box_office"], "500");
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert!(value[0].get("genre").is_none());
    }

    #[test]
    fn test_extra_columns_reach_json_output() {
        let mut movie = Movie::new(1, "Alpha", Numeric::new(2000), Numeric::new(100));
        movie.extra.insert("genre".to_string(), Value::from("Drama"));
        movie.extra.insert("directors".to_string(), Value::from("shadowed"));
        let dataset = Dataset::from_parts(vec![movie], Relations::default());

        let rows = display_rows(&dataset, &ViewState::full(&dataset));
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

        assert_eq!(value[0]["genre"], "Drama");
        assert_eq!(value[0]["directors"], "N/A");
        assert_eq!(rows[0].extra.len(), 1);
    }
}
