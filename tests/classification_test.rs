//! Integration tests for structural query classification

use fornax::prelude::*;
use fornax::query::{AutomatonState, classify_detailed};

#[test]
fn test_reference_scenarios() -> Result<()> {
    assert_eq!(classify("fornax is awesome")?, QueryType::Free);
    assert_eq!(classify("\"America\"")?, QueryType::Phrase);
    assert_eq!(classify("mit AND apache")?, QueryType::Boolean);
    assert_eq!(classify("mo*e*")?, QueryType::WildCard);
    assert_eq!(classify("america >30")?, QueryType::Frequency);
    assert_eq!(classify("check $1 mate")?, QueryType::Proximity);
    Ok(())
}

#[test]
fn test_fallbacks_follow_start_state() -> Result<()> {
    let keyword = classify_detailed("fornax")?;
    assert_eq!(keyword.query_type, QueryType::KeyWord);
    assert_eq!(keyword.state, AutomatonState::Spaceless);

    let free = classify_detailed("small retrieval engine")?;
    assert_eq!(free.query_type, QueryType::Free);
    assert_eq!(free.state, AutomatonState::Spaceful);
    Ok(())
}

#[test]
fn test_grouped_query_classified_by_content() -> Result<()> {
    let classification = classify_detailed("(check $1 mate)")?;
    assert_eq!(classification.query_type, QueryType::Proximity);
    assert!(classification.grouped);
    Ok(())
}

#[test]
fn test_classifier_instances_agree_with_default() -> Result<()> {
    let classifier = QueryClassifier::new()?;
    for query in ["title:rust", "colou?", "/ab+c/", "!spam", "apple %2 pie"] {
        assert_eq!(classifier.classify(query)?, classify(query)?, "{query}");
    }
    Ok(())
}

#[test]
fn test_blank_query_is_an_error() {
    let err = classify("   ").unwrap_err();
    assert!(matches!(err, FornaxError::EmptyInput(_)));
    assert!(err.is_validation());
}
