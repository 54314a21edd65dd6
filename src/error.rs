//! Error types for the k-NN classifier.

use thiserror::Error;

/// Classifier error types.
#[derive(Error, Debug)]
pub enum KnnError {
    /// JSON parsing error (configuration loading)
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Neighbor count must be positive
    #[error("Invalid k: {0} (must be at least 1)")]
    InvalidK(usize),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Activation pattern with no elements
    #[error("Empty pattern: activation patterns must have at least one element")]
    EmptyPattern,

    /// Active bit index outside the pattern width
    #[error("Index out of range: {index} (width {width})")]
    IndexOutOfRange { index: usize, width: usize },

    /// Query pattern length differs from a stored pattern
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Learning requested with a bucket index but no actual value
    #[error("Missing actual value: bucket index {0} supplied without actValue")]
    MissingActualValue(usize),
}

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, KnnError>;
