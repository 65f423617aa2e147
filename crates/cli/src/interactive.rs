//! Line-oriented interactive session.
//!
//! Each input line is one user action. Filter controls keep their text
//! between lines, the way form inputs would, and every change re-renders
//! the table.

use anyhow::{Context, Result};
use colored::Colorize;
use pipeline::{FilterControl, FilterInputs, SortColumn};
use session::{Command, MovieTableSession, Renderer};
use std::io::{BufRead, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Change one filter control; an empty value clears it
    Set(FilterControl, String),
    Sort(SortColumn),
    Clear,
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  title [text]       filter by title (empty clears)
  director [text]    filter by director
  country [text]     filter by country
  from [year]        lowest release year (default 1900)
  to [year]          highest release year (default 2100)
  sort <column>      toggle sort on title, release_year, box_office, director, country
  clear              reset every filter
  show               render the table again
  help               show this message
  quit               leave";

/// Parse one line. Blank lines give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "sort" => {
            if rest.is_empty() {
                return Err("sort needs a column name".to_string());
            }
            Action::Sort(rest.parse().map_err(|e| format!("{}", e))?)
        }
        "clear" => Action::Clear,
        "show" => Action::Show,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => {
            let control: FilterControl = other
                .parse()
                .map_err(|_| format!("unknown command '{}', type 'help'", word))?;
            Action::Set(control, rest.to_string())
        }
    };
    Ok(Some(action))
}

/// Run the loop until `quit` or end of input.
///
/// Tables go to `renderer`; prompts, help and messages go to `out`.
pub fn run(
    session: &mut MovieTableSession,
    renderer: &mut impl Renderer,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut inputs = FilterInputs::default();

    writeln!(out, "{}", "Type 'help' for commands.".cyan()).context("Failed to write output")?;
    session.render(renderer)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Action::Quit)) => break,
            Ok(Some(Action::Help)) => writeln!(out, "{}", HELP).context("Failed to write output")?,
            Ok(Some(Action::Show)) => session.render(renderer)?,
            Ok(Some(Action::Clear)) => {
                inputs.clear();
                session.dispatch_and_render(Command::SetFilterCriteria(inputs.to_criteria()), renderer)?;
            }
            Ok(Some(Action::Set(control, value))) => {
                inputs.set(control, value);
                session.dispatch_and_render(Command::SetFilterCriteria(inputs.to_criteria()), renderer)?;
            }
            Ok(Some(Action::Sort(column))) => {
                session.dispatch_and_render(Command::ToggleSort(column), renderer)?;
                if let Some((column, order)) = session.active_sort() {
                    writeln!(out, "{} {} {}", "Sorted by".cyan(), column, order)
                        .context("Failed to write output")?;
                }
            }
            Err(message) => writeln!(out, "{}", message.red()).context("Failed to write output")?,
        }
        prompt(out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "{} ", ">".bold()).context("Failed to write output")?;
    out.flush().context("Failed to flush output")
}
