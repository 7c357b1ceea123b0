use thiserror::Error;

/// Errors produced while loading and preparing records.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("no valid records: at least one record with both feature and label is required")]
    EmptyInput,

    #[error("invalid bounds: min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Scaler not fitted. Call fit() first.")]
    NotFitted,

    #[error("invalid split fraction {0}: must be between 0 and 1")]
    InvalidSplit(f64),

    #[error("unexpected record format: {0}")]
    Format(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
