//! Error types for the triage engine.
//!
//! The engine mostly reports failure through sentinels (`None`, `NaN`, empty
//! lists) because the operator workflow must keep going when a single row is
//! bad. [`TriageError`] covers the places where a caller needs to know *why*:
//! the error-carrying parser variants, record decoding, and session loading.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`Parse`](TriageError::Parse) | A coordinate or identifier string could not be decoded |
//! | [`InvalidRecord`](TriageError::InvalidRecord) | A catalogue or candidate row is missing or has a malformed field |
//! | [`NoMatchingImages`](TriageError::NoMatchingImages) | No candidate row could be paired with an image at load time |
//! | [`Calculation`](TriageError::Calculation) | A numerical step produced an unusable value |
//!
//! ```
//! use pulsar_core::{TriageError, TriageResult};
//!
//! fn period_from_frequency(f: f64) -> TriageResult<f64> {
//!     if f <= 0.0 {
//!         return Err(TriageError::calculation("period_from_frequency", "frequency must be positive"));
//!     }
//!     Ok(1.0 / f)
//! }
//!
//! assert!(period_from_frequency(0.0).is_err());
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriageError {
    /// Input string is not in any accepted format.
    #[error("Cannot parse '{input}' as {expected}")]
    Parse { input: String, expected: String },

    /// Row-level problem in catalogue or candidate data.
    #[error("Invalid record ({context}): {message}")]
    InvalidRecord { context: String, message: String },

    /// Every candidate row was dropped while pairing with images.
    #[error("No image matches any of the {rows} candidate rows")]
    NoMatchingImages { rows: usize },

    #[error("Calculation error in {context}: {message}")]
    Calculation { context: String, message: String },
}

/// Convenience alias for `Result<T, TriageError>`.
pub type TriageResult<T> = Result<T, TriageError>;

impl TriageError {
    pub fn parse(input: &str, expected: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn invalid_record(context: &str, reason: &str) -> Self {
        Self::InvalidRecord {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn calculation(context: &str, reason: &str) -> Self {
        Self::Calculation {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }
}
