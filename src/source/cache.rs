use std::path::{Path, PathBuf};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sled::{Db, Tree};

use crate::expr::TagExpr;

use super::error::CacheError;

/// Tree holding the cached tag list
const CACHE_TREE: &str = "autotags";
/// Fixed key under which the last successfully parsed list is stored
const CACHE_KEY: &str = "auto-tags";

/// Last successfully parsed tag list
///
/// The structured expressions are cached rather than display labels or
/// condition strings: labels are recomputed deterministically from the
/// expressions, which keeps the label list and the compiled predicate list
/// aligned by construction.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedTags {
    pub exprs: Vec<TagExpr>,
    /// Unix timestamp of the fetch that produced this list
    pub fetched_at: i64,
}

impl CachedTags {
    /// Wrap freshly parsed expressions with the current timestamp
    #[must_use]
    pub fn now(exprs: Vec<TagExpr>) -> Self {
        Self {
            exprs,
            fetched_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Cache wrapper that persists the tag list between sessions
///
/// Backed by sled so a session without connectivity can still filter using
/// the list from the last successful fetch. Cross-process atomicity is
/// sled's responsibility.
pub struct TagCache {
    _db: Db,
    tree: Tree,
}

impl TagCache {
    /// Opens or creates a cache at the specified path
    ///
    /// # Errors
    /// Returns `CacheError` if the database cannot be opened or the cache
    /// tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        let db = sled::open(path)?;
        let tree = db.open_tree(CACHE_TREE)?;
        Ok(Self { _db: db, tree })
    }

    /// Default cache location under the user's local data directory
    ///
    /// # Errors
    /// Returns `CacheError::LocationError` if the data directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf, CacheError> {
        let data_dir = dirs::data_local_dir().ok_or_else(|| {
            CacheError::LocationError("no local data directory".to_string())
        })?;
        Ok(data_dir.join("autotags").join("cache"))
    }

    /// Get the cached tag list
    ///
    /// Returns `Ok(None)` when nothing has been cached yet.
    ///
    /// # Errors
    /// Returns `CacheError` if database operations fail or deserialization
    /// errors occur.
    pub fn get(&self) -> Result<Option<CachedTags>, CacheError> {
        match self.tree.get(CACHE_KEY)? {
            Some(value) => {
                let (cached, _): (CachedTags, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(Some(cached))
            }
            None => Ok(None),
        }
    }

    /// Store a freshly parsed tag list, replacing any previous one
    ///
    /// # Errors
    /// Returns `CacheError` if database operations fail or serialization
    /// errors occur.
    pub fn set(&self, tags: &CachedTags) -> Result<(), CacheError> {
        let value = bincode::encode_to_vec(tags, bincode::config::standard())?;
        self.tree.insert(CACHE_KEY, value)?;
        Ok(())
    }

    /// Drop the cached tag list
    ///
    /// # Errors
    /// Returns `CacheError` if database operations fail.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.tree.remove(CACHE_KEY)?;
        Ok(())
    }
}
