//! Error types for the scoring engine
//!
//! Analysis itself never fails: malformed or empty content degrades to clamped
//! boundary scores. Errors only arise when decoding wire-format input.

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error types
#[derive(Error, Debug)]
pub enum Error {
    /// Payload is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload decoded but carries an unusable value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
