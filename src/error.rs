//! Error types for the Fornax library.
//!
//! All fallible operations return [`FornaxError`]. Validation failures are
//! reported at the call boundary; algorithmic "no result" cases (no correction
//! candidate, no matching query pattern) are not errors and never surface here.
//!
//! # Examples
//!
//! ```
//! use fornax::error::{FornaxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FornaxError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Fornax operations.
#[derive(Error, Debug)]
pub enum FornaxError {
    /// Zero-length text or an empty sequence where at least one unit is required.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A gram size (or n-gram distance size) smaller than one.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (vocabulary and config files read by the CLI)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FornaxError.
pub type Result<T> = std::result::Result<T, FornaxError>;

impl FornaxError {
    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        FornaxError::EmptyInput(msg.into())
    }

    /// Create a new invalid size error.
    pub fn invalid_size<S: Into<String>>(msg: S) -> Self {
        FornaxError::InvalidSize(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        FornaxError::Query(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FornaxError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FornaxError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Returns true for the validation failures raised on malformed input.
    pub fn is_validation(&self) -> bool {
        matches!(self, FornaxError::EmptyInput(_) | FornaxError::InvalidSize(_))
    }
}
