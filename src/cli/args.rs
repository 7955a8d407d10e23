//! Command line argument parsing for the Fornax CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;

/// Fornax - query classification and spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "fornax")]
#[command(about = "Query classification and n-gram based spelling correction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FornaxArgs {
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

impl FornaxArgs {
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
    /// Classify the structure of a query
    Classify(ClassifyArgs),

    /// Correct a word against a vocabulary
    Correct(CorrectArgs),

    /// List ranked correction suggestions for a word
    Suggest(SuggestArgs),

    /// Score two strings with one or all distance metrics
    Distance(DistanceArgs),
}

/// Arguments for query classification
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments shared by `correct` and `suggest`
#[derive(Args, Debug, Clone)]
pub struct CorrectArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Vocabulary file, one word per line
    #[arg(short = 'w', long, value_name = "FILE", env = "FORNAX_VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Minimum similarity of a correction (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Distance metric (levenshtein, ngram, jaro-winkler)
    #[arg(short, long, value_parser = parse_metric)]
    pub metric: Option<DistanceMetric>,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for listing suggestions
#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub correction: CorrectArgs,

    /// Maximum number of suggestions to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for scoring two strings
#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,

    /// Distance metric (all metrics when omitted)
    #[arg(short, long, value_parser = parse_metric)]
    pub metric: Option<DistanceMetric>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_metric(s: &str) -> std::result::Result<DistanceMetric, String> {
    DistanceMetric::parse_str(s).map_err(|e| e.to_string())
}
