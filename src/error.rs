//! Error types for pagemeld
//!
//! Missing data is never an error here: the resolver degrades to empty values.
//! These variants only cover the collaborators around it (parsing and I/O).

use thiserror::Error;

/// Main error type for page resolution
#[derive(Error, Debug)]
pub enum PageError {
    /// serde_json parse or serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// simd-json parse failure
    #[error("SIMD JSON error: {0}")]
    SimdJson(#[from] simd_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;
