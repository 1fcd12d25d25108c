//! Command line argument parsing for the Relish CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Relish - restaurant review analytics
#[derive(Parser, Debug, Clone)]
#[command(name = "relish")]
#[command(about = "Keyword frequencies, similarity ranking, and recommendations from restaurant reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RelishArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RelishArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the attribute-keyword frequency table
    Frequency(FrequencyArgs),

    /// Print the reviews most similar to the attribute keywords
    #[command(name = "top-reviews")]
    TopReviews(TopReviewsArgs),

    /// Print the top-3 restaurant recommendation
    Recommend(TopReviewsArgs),

    /// Run the whole pipeline and print all three artifacts
    Analyze(TopReviewsArgs),
}

/// Arguments for the frequency table command.
#[derive(clap::Args, Debug, Clone)]
pub struct FrequencyArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Replace an attribute's keyword list: ATTR=word1,word2,...
    /// (an empty list keeps the defaults for that attribute)
    #[arg(short, long = "keywords", value_name = "ATTR=WORDS")]
    pub keywords: Vec<String>,
}

/// Arguments for commands that rank reviews by similarity.
#[derive(clap::Args, Debug, Clone)]
pub struct TopReviewsArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Replace an attribute's keyword list: ATTR=word1,word2,...
    #[arg(short, long = "keywords", value_name = "ATTR=WORDS")]
    pub keywords: Vec<String>,

    /// Number of most-similar reviews to keep
    #[arg(short = 'n', long, default_value_t = 200,
          value_parser = clap::value_parser!(u32).range(50..=500))]
    pub top_n: u32,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = RelishArgs::parse_from(["relish", "frequency", "--input", "r.csv"]);
        assert_eq!(args.verbosity(), 1);

        let args = RelishArgs::parse_from(["relish", "-vv", "frequency", "--input", "r.csv"]);
        assert_eq!(args.verbosity(), 2);

        let args = RelishArgs::parse_from(["relish", "-q", "frequency", "--input", "r.csv"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_top_n_range_enforced() {
        let result = RelishArgs::try_parse_from([
            "relish",
            "top-reviews",
            "--input",
            "r.csv",
            "--top-n",
            "10",
        ]);
        assert!(result.is_err());

        let args = RelishArgs::parse_from([
            "relish",
            "top-reviews",
            "--input",
            "r.csv",
            "--top-n",
            "100",
        ]);
        match args.command {
            Command::TopReviews(top) => assert_eq!(top.top_n, 100),
            _ => panic!("expected top-reviews command"),
        }
    }

    #[test]
    fn test_repeated_keyword_overrides() {
        let args = RelishArgs::parse_from([
            "relish",
            "analyze",
            "--input",
            "r.csv",
            "--keywords",
            "service=fast,kind",
            "--keywords",
            "food=spicy",
        ]);
        match args.command {
            Command::Analyze(analyze) => assert_eq!(analyze.keywords.len(), 2),
            _ => panic!("expected analyze command"),
        }
    }
}
