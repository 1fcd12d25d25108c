//! Error types for the Relish library.
//!
//! All errors are represented by the [`RelishError`] enum. Most pipeline
//! stages are total functions and never fail; the normalizer is the main
//! producer of errors (schema mismatches are a caller-input problem and
//! propagate unchanged).
//!
//! # Examples
//!
//! ```
//! use relish::error::{RelishError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RelishError::schema("could not locate restaurant/review columns"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Relish operations.
#[derive(Error, Debug)]
pub enum RelishError {
    /// I/O errors (reading input files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Schema-related errors (missing or unresolvable columns)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Analysis-related errors (tokenization, scoring)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// CSV parsing errors from the input loader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RelishError.
pub type Result<T> = std::result::Result<T, RelishError>;

impl RelishError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        RelishError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RelishError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RelishError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RelishError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
