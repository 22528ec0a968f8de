//! Word-search solver binary.
//!
//! Loads a character grid from a text file and reports two counts: straight
//! line placements of a word in all eight directions, and "X" crossings of a
//! word on both diagonals.
//!
//! ```bash
//! cargo run -p ceres-cli -- input.txt
//! cargo run -p ceres-cli -- input.txt --word SANTA --cross-word ELF --list
//! ```

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use ceres_content::GridLoader;
use ceres_core::{CrossPattern, PatternCounter, Word};
use clap::Parser;
use console::style;

use crate::config::CliConfig;

/// Word search, kind of
#[derive(Parser, Debug)]
#[command(name = "ceres")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid file, one row per line
    input: PathBuf,

    /// Word counted in all eight directions
    #[arg(long)]
    word: Option<String>,

    /// Odd-length word forming both diagonals of an X
    #[arg(long)]
    cross_word: Option<String>,

    /// TOML file with `word` and `cross_word` keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every straight-line placement as `row,col direction`
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    logging::setup_logging();

    let cli = Cli::parse();
    let settings = CliConfig::from_env().merge(CliConfig {
        word: cli.word,
        cross_word: cli.cross_word,
        config_path: cli.config,
    });
    let search = settings.resolve()?;
    tracing::debug!(?search, "Resolved search config");

    let word = Word::new(&search.word);
    let pattern = CrossPattern::try_from(search.cross_word.as_str())
        .with_context(|| format!("Invalid cross word {:?}", search.cross_word))?;

    let grid = GridLoader::load(&cli.input)
        .with_context(|| format!("Failed to load grid from {}", cli.input.display()))?;
    tracing::info!(rows = grid.rows(), cols = grid.cols(), "Grid ready");

    let counter = PatternCounter::new(&grid);

    println!("{}", style("Part 1").bold());
    if cli.list {
        for occurrence in counter.all_occurrences(&word) {
            println!("{occurrence}");
        }
    }
    println!(
        "Number of {}es found: {}",
        word,
        style(counter.count_word(&word)).cyan()
    );

    println!("{}", style("Part 2").bold());
    println!(
        "Number of X-{}es found: {}",
        pattern.word(),
        style(counter.count_crossings(&pattern)).cyan()
    );

    Ok(())
}
