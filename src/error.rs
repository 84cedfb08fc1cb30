//! Error types for the seismic solver

use thiserror::Error;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
