//! Integration tests for n-gram based spelling correction

use std::sync::Arc;

use fornax::prelude::*;

fn vocabulary() -> Vec<&'static str> {
    vec!["sift", "sifted", "sifting", "shifting"]
}

#[test]
fn test_reference_correction() -> Result<()> {
    let corrector = SpellingCorrector::new(vocabulary())?;
    assert_eq!(corrector.correct("siftingg", 0.6)?, "sifting");
    Ok(())
}

#[test]
fn test_threshold_filtering_is_monotonic() -> Result<()> {
    let corrector = SpellingCorrector::new(vocabulary())?;

    let mut previous: Vec<Suggestion> = Vec::new();
    for threshold in [0.9, 0.8, 0.7, 0.6, 0.5, 0.0] {
        let current = corrector.suggest("siftingg", threshold)?;
        assert!(current.len() >= previous.len());
        assert_eq!(current[..previous.len()], previous[..]);
        previous = current;
    }
    assert_eq!(previous.len(), 4);
    Ok(())
}

#[test]
fn test_unrelated_word_is_returned_unchanged() -> Result<()> {
    let corrector = SpellingCorrector::new(vocabulary())?;
    assert_eq!(corrector.correct("qqq", 0.6)?, "qqq");
    assert!(corrector.suggest("qqq", 0.0)?.is_empty());
    Ok(())
}

#[test]
fn test_unbounded_trigram_config() -> Result<()> {
    let config = CorrectorConfig {
        gram_size: 3,
        bounded: false,
        metric: DistanceMetric::ngram(2)?,
        ..Default::default()
    };
    let corrector = SpellingCorrector::with_config(vocabulary(), config)?;

    assert_eq!(corrector.correct("siftingg", 0.6)?, "sifting");
    assert_eq!(corrector.stats().metric, "ngram(n=2)");
    Ok(())
}

#[test]
fn test_shared_corrector_across_threads() -> Result<()> {
    let corrector = Arc::new(SpellingCorrector::new(vocabulary())?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let corrector = Arc::clone(&corrector);
            std::thread::spawn(move || corrector.correct("siftingg", 0.6))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap()?, "sifting");
    }

    corrector.reload_vocabulary(["apple", "banana", "cherry"])?;
    assert_eq!(corrector.correct("banan", 0.6)?, "banana");
    Ok(())
}

#[test]
fn test_lexicon_serializes() -> Result<()> {
    let corrector = SpellingCorrector::new(vocabulary())?;
    let json = serde_json::to_string(corrector.lexicon().as_ref())?;

    let lexicon: fornax::spelling::Lexicon = serde_json::from_str(&json)?;
    assert_eq!(lexicon.len(), 4);
    assert!(lexicon.contains("shifting"));
    Ok(())
}
