use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, Relation};
use pipeline::{FilterControl, FilterInputs, SortColumn};
use session::{Command, JsonRenderer, MovieTableSession};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

mod interactive;
mod table;

use table::TerminalRenderer;

/// MovieTable - filterable, sortable movie listing
#[derive(Parser)]
#[command(name = "movie-table")]
#[command(about = "Filter and sort a relational movie database in the terminal", long_about = None)]
struct Cli {
    /// Path to the movie database JSON file
    #[arg(short, long, default_value = "movies_database.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table once with the given filters and sorts
    Show {
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,

        /// Case-insensitive director substring
        #[arg(long, default_value = "")]
        director: String,

        /// Case-insensitive country substring
        #[arg(long, default_value = "")]
        country: String,

        /// Lowest release year (defaults to 1900)
        #[arg(long, default_value = "")]
        year_from: String,

        /// Highest release year (defaults to 2100)
        #[arg(long, default_value = "")]
        year_to: String,

        /// Toggle sort on a column; repeat to flip the order
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<SortColumn>,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Explore the table interactively from stdin
    Interactive,

    /// Show dataset statistics
    Stats,
}

fn main() -> ExitCode {
    // Logs go to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load movie database {}", cli.data.display()))?,
    );
    tracing::debug!("Loaded dataset in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Show {
            title,
            director,
            country,
            year_from,
            year_to,
            sort,
            json,
        } => {
            let mut inputs = FilterInputs::default();
            inputs.set(FilterControl::Title, title);
            inputs.set(FilterControl::Director, director);
            inputs.set(FilterControl::Country, country);
            inputs.set(FilterControl::YearFrom, year_from);
            inputs.set(FilterControl::YearTo, year_to);
            handle_show(dataset, inputs, sort, json)
        }
        Commands::Interactive => handle_interactive(dataset),
        Commands::Stats => handle_stats(&dataset),
    }
}

/// Handle the 'show' command
fn handle_show(dataset: Arc<Dataset>, inputs: FilterInputs, sorts: Vec<SortColumn>, json: bool) -> Result<()> {
    let session = show_session(dataset, &inputs, sorts);

    if json {
        session.render(&mut JsonRenderer::new(io::stdout().lock()))
    } else {
        session.render(&mut TerminalRenderer::new())
    }
}

/// Filter once, then apply each `--sort` as a toggle in the order given.
fn show_session(dataset: Arc<Dataset>, inputs: &FilterInputs, sorts: Vec<SortColumn>) -> MovieTableSession {
    let mut session = MovieTableSession::new(dataset);

    session.dispatch(Command::SetFilterCriteria(inputs.to_criteria()));
    for column in sorts {
        session.dispatch(Command::ToggleSort(column));
    }
    session
}

/// Handle the 'interactive' command
fn handle_interactive(dataset: Arc<Dataset>) -> Result<()> {
    let mut session = MovieTableSession::new(dataset);
    interactive::run(
        &mut session,
        &mut TerminalRenderer::new(),
        io::stdin().lock(),
        &mut io::stdout(),
    )
}

/// Handle the 'stats' command
fn handle_stats(dataset: &Dataset) -> Result<()> {
    let counts = dataset.table_counts();
    let movies = dataset.movies();
    let nan_years = movies.iter().filter(|m| m.release_year.is_nan()).count();
    let nan_box_office = movies.iter().filter(|m| m.box_office.is_nan()).count();
    let relations = dataset.relations();

    println!("{}", "Dataset statistics".bold().blue());
    println!("{}Movies: {}", "• ".green(), counts.movies);
    println!("{}Authors: {}", "• ".green(), counts.authors);
    println!("{}Countries: {}", "• ".green(), counts.countries);
    println!("{}Director links: {}", "• ".green(), counts.movie_authors);
    println!("{}Country links: {}", "• ".green(), counts.movie_countries);
    println!(
        "{}Movies with directors: {}",
        "• ".cyan(),
        relations.get(Relation::Directors).len()
    );
    println!(
        "{}Movies with countries: {}",
        "• ".cyan(),
        relations.get(Relation::Countries).len()
    );
    println!("{}Unparseable release years: {}", "• ".yellow(), nan_years);
    println!("{}Unparseable box office values: {}", "• ".yellow(), nan_box_office);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, Numeric, Relations};
    use pipeline::SortOrder;

    fn create_test_dataset() -> Arc<Dataset> {
        let mut relations = Relations::default();
        relations.countries.insert(2, ["Chile"]);

        Arc::new(Dataset::from_parts(
            vec![
                Movie::new(1, "Alpha", Numeric::new(2000), Numeric::new(300)),
                Movie::new(2, "Beta", Numeric::new(1995), Numeric::new(500)),
                Movie::new(3, "Gamma", Numeric::new(2010), Numeric::new(100)),
            ],
            relations,
        ))
    }

    fn titles(session: &MovieTableSession) -> Vec<String> {
        session.rows().into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn test_show_args_parse() {
        let cli = Cli::try_parse_from([
            "movie-table", "--data", "db.json", "show", "--year-from", "1990", "--sort", "year", "--sort", "box_office",
        ])
        .unwrap();

        assert_eq!(cli.data, PathBuf::from("db.json"));
        match cli.command {
            Commands::Show { year_from, sort, json, .. } => {
                assert_eq!(year_from, "1990");
                assert_eq!(sort, vec![SortColumn::ReleaseYear, SortColumn::BoxOffice]);
                assert!(!json);
            }
            _ => panic!("expected show"),
        }
        assert!(Cli::try_parse_from(["movie-table", "show", "--sort", "rating"]).is_err());
    }

    #[test]
    fn test_repeated_sort_flips_in_order() {
        let inputs = FilterInputs::default();

        let session = show_session(create_test_dataset(), &inputs, vec![SortColumn::BoxOffice]);
        assert_eq!(titles(&session), vec!["Gamma", "Alpha", "Beta"]);

        let session = show_session(
            create_test_dataset(),
            &inputs,
            vec![SortColumn::BoxOffice, SortColumn::BoxOffice],
        );
        assert_eq!(titles(&session), vec!["Beta", "Alpha", "Gamma"]);
        assert_eq!(session.active_sort(), Some((SortColumn::BoxOffice, SortOrder::Descending)));

        // The last --sort decides the final order
        let session = show_session(
            create_test_dataset(),
            &inputs,
            vec![SortColumn::BoxOffice, SortColumn::Title],
        );
        assert_eq!(titles(&session), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_show_filters_before_sorting() {
        let mut inputs = FilterInputs::default();
        inputs.set(FilterControl::YearFrom, "1999");

        let session = show_session(create_test_dataset(), &inputs, vec![SortColumn::ReleaseYear, SortColumn::ReleaseYear]);
        assert_eq!(titles(&session), vec!["Gamma", "Alpha"]);
        assert_eq!(session.rows()[0].countries, "N/A");
    }
}
