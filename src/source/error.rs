//! Tag source and cache error types
//!
//! Retrieval and cache failures are recoverable by design: the session
//! layer logs them and degrades to the cached or empty tag list instead of
//! failing test collection.

use thiserror::Error;

/// Errors while retrieving the raw tag list
#[derive(Debug, Error)]
pub enum SourceError {
    /// Represents a network error (connection failure or timeout)
    #[error("Request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The tag service answered with a non-success status
    #[error("Tag service returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// Source unavailable for another reason (e.g. offline mode)
    #[error("Tag source unavailable: {0}")]
    Unavailable(String),
}

/// Errors while reading or writing the tag cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Represents a sled database error
    #[error("Cache database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding cached tags: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding cached tags: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// The cache directory cannot be determined
    #[error("Could not determine cache location: {0}")]
    LocationError(String),
}
