//! Tag source provider and cache collaborator
//!
//! The remote tagging service serves a UTF-8 body of comma-separated tag
//! expressions. Retrieval runs once per session with a short bounded
//! timeout and no retry; on failure the session falls back to the last
//! successfully parsed list, persisted in a sled-backed cache.

pub mod cache;
pub mod error;
pub mod remote;

pub use cache::{CachedTags, TagCache};
pub use error::{CacheError, SourceError};
pub use remote::RemoteTagSource;

/// Provider of the raw tag-expression list
pub trait TagSource {
    /// Retrieve the raw comma-separated tag list
    ///
    /// # Errors
    /// Returns `SourceError` when the list cannot be retrieved; callers are
    /// expected to fall back to the cache rather than surface this.
    fn fetch(&self) -> Result<String, SourceError>;
}
