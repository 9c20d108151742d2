//! Unified error types for jobsift.
//!
//! The sifting engine itself is total: classification, extraction, and
//! normalization have no failure modes, only "no match" outcomes. Errors
//! exist solely at the ingestion boundary, where the collaborator's parsed
//! record batch enters the core.

use thiserror::Error;

/// A specialized [`Result`] type for jobsift operations.
///
/// # Example
///
/// ```rust
/// use jobsift::error::Result;
/// use jobsift::JobRecord;
///
/// fn load(input: &str) -> Result<Vec<JobRecord>> {
///     jobsift::record::batch_from_json(input)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SiftError>;

/// The error type for all jobsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiftError {
    /// The caller handed the boundary something that is not a record batch.
    ///
    /// Typically a non-array JSON value where an array of records was
    /// expected. The engine never swallows this; it is reported so the
    /// upload collaborator can surface it.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// JSON parsing/serialization error at the boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiftError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SiftError::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an invalid-input error.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SiftError::InvalidInput { .. })
    }

    /// Returns `true` if this is a JSON error.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, SiftError::Json(_))
    }
}
