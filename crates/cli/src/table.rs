//! Coloured terminal table.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use session::{DisplayRow, Renderer, NOT_AVAILABLE};
use std::io::{self, Write};

const HEADERS: [&str; 5] = ["Title", "Year", "Box Office", "Directors", "Countries"];

/// Renders rows to stdout with a bold header and dimmed placeholders.
pub struct TerminalRenderer {
    out: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, rows: &[DisplayRow]) -> Result<()> {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(cells(row)) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = self.out.lock();
        let header: Vec<String> = HEADERS
            .iter()
            .zip(column_widths(&widths))
            .map(|(h, w)| pad(h, w).bold().blue().to_string())
            .collect();
        writeln!(out, "{}", header.join("  ")).context("Failed to write table")?;

        for row in rows {
            let line: Vec<String> = cells(row)
                .iter()
                .zip(column_widths(&widths))
                .map(|(cell, w)| style(cell, pad(cell, w)).to_string())
                .collect();
            writeln!(out, "{}", line.join("  ")).context("Failed to write table")?;
        }

        let summary = format!("{} movie{}", rows.len(), if rows.len() == 1 { "" } else { "s" });
        writeln!(out, "{} {}", "✓".green(), summary).context("Failed to write table")?;
        out.flush().context("Failed to flush stdout")
    }
}

fn cells(row: &DisplayRow) -> [&str; 5] {
    [
        &row.title,
        &row.release_year,
        &row.box_office,
        &row.directors,
        &row.countries,
    ]
}

/// Padding width per column. The last column is never padded, so lines
/// carry no trailing spaces inside the colour codes.
fn column_widths(widths: &[usize; 5]) -> impl Iterator<Item = usize> + '_ {
    let last = widths.len() - 1;
    widths
        .iter()
        .enumerate()
        .map(move |(i, w)| if i == last { 0 } else { *w })
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

fn style(cell: &str, padded: String) -> ColoredString {
    match cell {
        NOT_AVAILABLE => padded.dimmed(),
        "NaN" => padded.red(),
        _ => padded.normal(),
    }
}
