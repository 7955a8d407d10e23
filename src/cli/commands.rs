//! Command implementations for the Fornax CLI.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::distance::{DistanceMetric, StringDistance};
use crate::error::Result;
use crate::query::classify_detailed;
use crate::spelling::{CorrectorConfig, SpellingCorrector};

/// Execute a CLI command.
pub fn execute_command(args: FornaxArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_query(classify_args, &args),
        Command::Correct(correct_args) => correct_word(correct_args, &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
        Command::Distance(distance_args) => compute_distance(distance_args, &args),
    }
}

/// Classify a query.
fn classify_query(args: &ClassifyArgs, cli_args: &FornaxArgs) -> Result<()> {
    let classification = classify_detailed(&args.query)?;

    output_result(
        "Query classified",
        &ClassificationResult {
            query: args.query.clone(),
            query_type: classification.query_type,
            state: classification.state,
            grouped: classification.grouped,
        },
        cli_args,
    )
}

/// Correct a single word.
fn correct_word(args: &CorrectArgs, cli_args: &FornaxArgs) -> Result<()> {
    let corrector = build_corrector(args)?;
    let threshold = args.threshold.unwrap_or(corrector.config().threshold);
    let correction = corrector.correct(&args.word, threshold)?;

    output_result(
        "Correction",
        &CorrectionResult {
            changed: correction != args.word.trim().to_lowercase(),
            input: args.word.clone(),
            correction,
            threshold,
            metric: corrector.config().metric.to_string(),
        },
        cli_args,
    )
}

/// List ranked suggestions for a word.
fn suggest_words(args: &SuggestArgs, cli_args: &FornaxArgs) -> Result<()> {
    let corrector = build_corrector(&args.correction)?;
    let threshold = args
        .correction
        .threshold
        .unwrap_or(corrector.config().threshold);

    let mut suggestions = corrector.suggest(&args.correction.word, threshold)?;
    if let Some(limit) = args.limit {
        suggestions.truncate(limit);
    }

    output_result(
        "Suggestions",
        &SuggestionResults {
            input: args.correction.word.clone(),
            threshold,
            metric: corrector.config().metric.to_string(),
            suggestions,
        },
        cli_args,
    )
}

/// Score two strings.
fn compute_distance(args: &DistanceArgs, cli_args: &FornaxArgs) -> Result<()> {
    let metrics = match args.metric {
        Some(metric) => vec![metric],
        None => vec![
            DistanceMetric::Levenshtein,
            DistanceMetric::NGram {
                n: crate::distance::DEFAULT_NGRAM_SIZE,
            },
            DistanceMetric::jaro_winkler(crate::distance::DEFAULT_JARO_WINKLER_THRESHOLD),
        ],
    };

    let scores = metrics
        .iter()
        .map(|metric| MetricScore {
            metric: metric.name().to_string(),
            score: metric.distance(&args.a, &args.b),
        })
        .collect();

    output_result(
        "Distances",
        &DistanceResults {
            a: args.a.clone(),
            b: args.b.clone(),
            scores,
        },
        cli_args,
    )
}

/// Build a corrector from the vocabulary and configuration files.
pub fn build_corrector(args: &CorrectArgs) -> Result<SpellingCorrector> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => CorrectorConfig::default(),
    };
    if let Some(metric) = args.metric {
        config.metric = metric;
    }

    let vocabulary = load_vocabulary(&args.vocabulary)?;
    info!(
        "Loaded {} vocabulary words from {}",
        vocabulary.len(),
        args.vocabulary.display()
    );

    SpellingCorrector::with_config(vocabulary, config)
}

/// Load a vocabulary file: one word per line, blank lines and `#` comments skipped.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;

    Ok(parse_vocabulary(&content))
}

/// Parse vocabulary file contents.
pub fn parse_vocabulary(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Load a corrector configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<CorrectorConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    CorrectorConfig::from_json(&json)
}
