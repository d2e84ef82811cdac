//! Autotags - a test-selection filter driven by a remote CI tag service
//!
//! This library fetches (or reuses a cached copy of) a list of tag
//! expressions flagging broken/unstable tests, compiles the expressions
//! into a single matcher, and applies that matcher during test collection
//! to mark matching test functions as skipped.

use thiserror::Error;

pub mod cli;
pub mod collect;
pub mod config;
pub mod expr;
pub mod session;
pub mod source;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
///
/// Nothing here is fatal to a test run: the session layer degrades to the
/// cache (or to an empty tag set) instead of propagating. These variants
/// surface only through the diagnostic CLI.
#[derive(Debug, Error)]
pub enum AutotagsError {
    /// Tag source error (network fetch)
    #[error("Tag source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Cache error
    #[error("Cache error: {0}")]
    CacheError(#[from] source::CacheError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
