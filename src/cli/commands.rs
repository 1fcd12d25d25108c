//! Command implementations for the Relish CLI.

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::frequency::frequency_after_merge;
use crate::pipeline::run_analysis;
use crate::recommend::recommend_top3;
use crate::schema::{normalize, RawTable, ReviewRecord};
use crate::similarity::select_top_by_cosine;
use crate::vocabulary::{build_vocabulary, Attribute};

/// Execute a CLI command.
pub fn execute_command(args: RelishArgs) -> Result<()> {
    match &args.command {
        Command::Frequency(freq_args) => frequency_table(freq_args.clone(), &args),
        Command::TopReviews(top_args) => top_reviews(top_args.clone(), &args),
        Command::Recommend(top_args) => recommend(top_args.clone(), &args),
        Command::Analyze(top_args) => analyze(top_args.clone(), &args),
    }
}

/// Load a CSV file into a raw table.
///
/// The header row becomes the column list; every cell is kept as a string.
/// Rows shorter than the header are tolerated (missing cells read back as
/// empty strings during normalization).
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable::new(columns, rows))
}

/// Load a CSV file and normalize it into review records.
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<ReviewRecord>> {
    let table = load_table(path)?;
    normalize(&table)
}

/// Parse repeated `ATTR=word1,word2` arguments into vocabulary overrides.
///
/// Attribute names are matched case-insensitively; unknown names are
/// ignored with a warning, mirroring the override rule of the vocabulary
/// builder. An `ATTR=` entry with no words keeps that attribute's
/// defaults.
pub fn parse_overrides(specs: &[String]) -> HashMap<String, Vec<String>> {
    let mut overrides = HashMap::new();

    for spec in specs {
        let Some((name, words)) = spec.split_once('=') else {
            warn!("ignoring malformed keyword override '{spec}' (expected ATTR=WORDS)");
            continue;
        };

        let name = name.trim().to_lowercase();
        if Attribute::from_name(&name).is_none() {
            warn!("ignoring keyword override for unknown attribute '{name}'");
            continue;
        }

        let list: Vec<String> = words
            .split(',')
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        overrides.insert(name, list);
    }

    overrides
}

/// Print the attribute-keyword frequency table.
fn frequency_table(args: FrequencyArgs, cli_args: &RelishArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading reviews from: {}", args.input.display());
    }

    let records = load_reviews(&args.input)?;
    let vocabulary = build_vocabulary(Some(&parse_overrides(&args.keywords)));
    let rows = frequency_after_merge(&records, &vocabulary);

    output_result("Word frequencies (merged)", &rows, cli_args)
}

/// Print the reviews most similar to the attribute keywords.
fn top_reviews(args: TopReviewsArgs, cli_args: &RelishArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading reviews from: {}", args.input.display());
    }

    let records = load_reviews(&args.input)?;
    let vocabulary = build_vocabulary(Some(&parse_overrides(&args.keywords)));
    let scored = select_top_by_cosine(&records, &vocabulary, args.top_n as usize)?;

    let message = format!("Top {} reviews by cosine similarity", args.top_n);
    output_result(&message, &scored, cli_args)
}

/// Print the top-3 restaurant recommendation.
fn recommend(args: TopReviewsArgs, cli_args: &RelishArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading reviews from: {}", args.input.display());
    }

    let records = load_reviews(&args.input)?;
    let vocabulary = build_vocabulary(Some(&parse_overrides(&args.keywords)));
    let scored = select_top_by_cosine(&records, &vocabulary, args.top_n as usize)?;
    let rows = recommend_top3(&scored);

    output_result(
        "Top 3 recommendations (avg sentiment of selected reviews)",
        &rows,
        cli_args,
    )
}

/// Run the whole pipeline and print all three artifacts.
fn analyze(args: TopReviewsArgs, cli_args: &RelishArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading reviews from: {}", args.input.display());
    }

    let table = load_table(&args.input)?;
    let overrides = parse_overrides(&args.keywords);
    let report = run_analysis(&table, Some(&overrides), args.top_n as usize)?;

    output_result("Analysis report", &report, cli_args)
}
