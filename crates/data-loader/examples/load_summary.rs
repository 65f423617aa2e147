//! Load a movie database file and print a short summary.
//!
//! Run with: cargo run -p data-loader --example load_summary -- data/movies_database.json

use anyhow::{Context, Result};
use data_loader::{Dataset, Relation};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies_database.json"));

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let elapsed = start.elapsed();

    let nan_years = dataset
        .movies()
        .iter()
        .filter(|m| m.release_year.is_nan())
        .count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!(
        "Movies with directors: {}",
        dataset.relations().get(Relation::Directors).len()
    );
    println!(
        "Movies with countries: {}",
        dataset.relations().get(Relation::Countries).len()
    );
    println!("Movies with unparseable year: {}", nan_years);
    Ok(())
}
