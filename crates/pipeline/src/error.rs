//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors raised while turning raw request fields into a [`RawRecord`].
///
/// These carry the offending field name so the request boundary can tell the
/// caller exactly what was wrong.
///
/// [`RawRecord`]: crate::RawRecord
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A required dimension field was absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A required dimension field was present but not numeric
    #[error("Invalid value for {field}: {value:?} is not a number")]
    InvalidField { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
