//! Integration tests for CLI vocabulary and configuration loading

use std::io::Write;

use clap::Parser;
use fornax::cli::args::{Command, FornaxArgs};
use fornax::cli::commands::{build_corrector, load_config, load_vocabulary};
use fornax::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_load_vocabulary_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "# verbs")?;
    writeln!(file, "sift\nsifted\n\nsifting\nShifting")?;

    let words = load_vocabulary(file.path())?;
    assert_eq!(words, vec!["sift", "sifted", "sifting", "shifting"]);
    Ok(())
}

#[test]
fn test_load_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"threshold": 0.7, "metric": {{"type": "ngram", "n": 3}}}}"#)?;

    let config = load_config(file.path())?;
    assert_eq!(config.threshold, 0.7);
    assert_eq!(config.metric, DistanceMetric::NGram { n: 3 });

    let mut invalid = NamedTempFile::new()?;
    write!(invalid, r#"{{"threshold": 2.0}}"#)?;
    assert!(matches!(load_config(invalid.path()), Err(FornaxError::Config(_))));
    Ok(())
}

#[test]
fn test_build_corrector_from_args() -> Result<()> {
    let mut vocabulary = NamedTempFile::new()?;
    writeln!(vocabulary, "sift\nsifted\nsifting\nshifting")?;
    let path = vocabulary.path().to_string_lossy().to_string();

    let args = FornaxArgs::try_parse_from([
        "fornax",
        "correct",
        "siftingg",
        "--vocabulary",
        path.as_str(),
        "--metric",
        "jaro-winkler",
    ])
    .map_err(|e| FornaxError::invalid_argument(e.to_string()))?;

    let Command::Correct(correct_args) = args.command else {
        panic!("Expected Correct command");
    };

    let corrector = build_corrector(&correct_args)?;
    assert_eq!(
        corrector.config().metric,
        DistanceMetric::JaroWinkler { threshold: 0.7 }
    );
    assert_eq!(corrector.correct_default("siftingg")?, "sifting");
    Ok(())
}
