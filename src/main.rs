use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wordmesh::analyze::analyze;
use wordmesh::output::{json, terminal};
use wordmesh::stopwords;
use wordmesh::store::RelationStore;

/// Wordmesh: distance-weighted word co-occurrence analysis.
///
/// Words appearing near each other in a text accumulate a relation weight
/// inversely proportional to their token distance.
#[derive(Parser)]
#[command(name = "wordmesh", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text file and print the relation table as JSON
    Analyze {
        /// Path to the text file to analyze
        file: PathBuf,

        /// Path to a stop-word list, one word per line
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Merge in the built-in English stop-word list
        #[arg(long)]
        english: bool,

        /// Max forward distance at which two tokens still co-occur (default: 100)
        #[arg(long, default_value = "100")]
        limit: usize,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the strongest word pairs as a terminal ranking
    Top {
        /// Path to the text file to analyze
        file: PathBuf,

        /// Path to a stop-word list, one word per line
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Merge in the built-in English stop-word list
        #[arg(long)]
        english: bool,

        /// Max forward distance at which two tokens still co-occur (default: 100)
        #[arg(long, default_value = "100")]
        limit: usize,

        /// How many pairs to show (default: 20)
        #[arg(long, default_value = "20")]
        count: usize,

        /// Emit the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordmesh=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            stop_words,
            english,
            limit,
            pretty,
        } => {
            let store = run_analysis(&file, stop_words.as_deref(), english, limit)?;
            println!("{}", json::render(&store, pretty)?);
        }
        Commands::Top {
            file,
            stop_words,
            english,
            limit,
            count,
            json,
        } => {
            let store = run_analysis(&file, stop_words.as_deref(), english, limit)?;
            let vocabulary = store.words().len();
            let ranked = terminal::strongest_pairs(&store, count);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal::display_top_pairs(&ranked, store.len(), vocabulary);
            }
        }
    }

    Ok(())
}

/// Read the input file, assemble the stop-word set, and run the pass.
fn run_analysis(
    file: &Path,
    stop_list: Option<&Path>,
    english: bool,
    limit: usize,
) -> Result<RelationStore> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read input file '{}'", file.display()))?;

    // The stop-word set is assembled fresh per run, never shared.
    let mut stop_words: HashSet<String> = HashSet::new();
    if let Some(path) = stop_list {
        stop_words.extend(stopwords::load_stop_words(path)?);
    }
    if english {
        stop_words.extend(stopwords::english());
    }

    let mut store = RelationStore::new();
    analyze(&mut store, &text, limit, &stop_words);
    info!(
        pairs = store.len(),
        stop_words = stop_words.len(),
        "analysis complete"
    );
    Ok(store)
}
