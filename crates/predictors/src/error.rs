//! Error types for the predictors crate.

use thiserror::Error;

/// Errors that can occur while loading model artifacts or running inference
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be found or opened
    #[error("Failed to open model artifact {path}: {source}")]
    ArtifactNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading an artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Artifact file is not valid JSON or doesn't match the expected shape
    #[error("Failed to parse model artifact {path}: {reason}")]
    ParseError { path: String, reason: String },

    /// Artifact parsed but its node arrays are internally inconsistent
    #[error("Malformed model artifact: {reason}")]
    MalformedArtifact { reason: String },

    /// Feature vector handed to a predictor has the wrong length
    #[error("Feature length mismatch: expected {expected} features, got {found}")]
    FeatureLengthMismatch { expected: usize, found: usize },

    /// Classifier produced a class index the label encoder doesn't know
    #[error("Unknown label index {index} (encoder knows {known} classes)")]
    UnknownLabel { index: usize, known: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
