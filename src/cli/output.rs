//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{FornaxArgs, OutputFormat};
use crate::error::Result;
use crate::query::{AutomatonState, QueryType};
use crate::spelling::Suggestion;

/// Result structure for query classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub query: String,
    pub query_type: QueryType,
    pub state: AutomatonState,
    pub grouped: bool,
}

/// Result structure for a single correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub input: String,
    pub correction: String,
    pub changed: bool,
    pub threshold: f64,
    pub metric: String,
}

/// Result structure for a suggestion listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub input: String,
    pub threshold: f64,
    pub metric: String,
    pub suggestions: Vec<Suggestion>,
}

/// A single metric score.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: String,
    pub score: f64,
}

/// Result structure for string distances.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResults {
    pub a: String,
    pub b: String,
    pub scores: Vec<MetricScore>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &FornaxArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &FornaxArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    let Some(obj) = value.as_object() else {
        println!("{}", format_value(&value));
        return Ok(());
    };

    if let Some(suggestions) = obj.get("suggestions").and_then(|s| s.as_array()) {
        output_suggestions_human(suggestions);
    } else if let Some(scores) = obj.get("scores").and_then(|s| s.as_array()) {
        output_scores_human(scores);
    } else {
        for (key, val) in obj {
            println!("{key}: {}", format_value(val));
        }
    }
    Ok(())
}

fn output_suggestions_human(suggestions: &[serde_json::Value]) {
    if suggestions.is_empty() {
        println!("No suggestions");
        return;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}. {} (score: {:.3}, shared grams: {})",
            i + 1,
            suggestion.get("word").and_then(|w| w.as_str()).unwrap_or(""),
            suggestion.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0),
            suggestion
                .get("shared_grams")
                .and_then(|g| g.as_u64())
                .unwrap_or(0)
        );
    }
}

fn output_scores_human(scores: &[serde_json::Value]) {
    for score in scores {
        println!(
            "{:<16} {:.4}",
            score.get("metric").and_then(|m| m.as_str()).unwrap_or(""),
            score.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0)
        );
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FornaxArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("keyword".to_string())),
            "keyword"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
        assert_eq!(format_value(&serde_json::json!(["a", 1])), "[a, 1]");
    }

    #[test]
    fn test_classification_serializes_snake_case() {
        let result = ClassificationResult {
            query: "mo*e*".to_string(),
            query_type: QueryType::WildCard,
            state: AutomatonState::Spaceless,
            grouped: false,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["query_type"], "wild_card");
        assert_eq!(value["state"], "spaceless");
    }
}
