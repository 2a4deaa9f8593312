//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Errors only arise before a simulation starts (configuration checks) or at
/// the input boundary (reference parsing). Once an engine is built, every
/// reference is processed without failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Engine parameters are out of range.
    ///
    /// Zero frame counts, thresholds outside `(0, 1]`, `min > max` and the
    /// like. Raised synchronously at construction, never mid-run.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A reference token could not be normalized into a page.
    #[error("Invalid page reference: {0:?}")]
    InvalidReference(String),

    /// JSON configuration could not be parsed, or a trace could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
