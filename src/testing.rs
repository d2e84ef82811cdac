//! Testing utilities for autotags
//!
//! Helper doubles and fixtures for unit tests: canned and failing tag
//! sources, temporary cache databases and collected-item builders.
//!
//! Only available when compiled with `cfg(test)`.

use tempfile::TempDir;

use crate::collect::{TestFunction, TestItem};
use crate::source::{SourceError, TagCache, TagSource};

/// Tag source returning a canned body
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl TagSource for StaticSource {
    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.body.clone())
    }
}

/// Tag source that always fails, simulating an unreachable service
pub struct FailingSource;

impl TagSource for FailingSource {
    fn fetch(&self) -> Result<String, SourceError> {
        Err(SourceError::Unavailable("simulated outage".to_string()))
    }
}

/// Open a tag cache in a fresh temporary directory
///
/// The returned `TempDir` must be kept alive for the duration of the test;
/// the directory is removed when it drops.
///
/// # Panics
/// Panics if the temporary directory or the cache cannot be created.
pub fn temp_cache() -> (TagCache, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cache = TagCache::open(dir.path().join("cache")).expect("Failed to open test cache");
    (cache, dir)
}

/// Build a function-shaped collected item without a source file
pub fn function_item(module: &str, qualified_name: &str) -> TestItem {
    TestItem::function(TestFunction::new(module, qualified_name))
}

/// Build a function-shaped collected item with a source file path
pub fn function_item_in_file(module: &str, qualified_name: &str, file: &str) -> TestItem {
    TestItem::function(TestFunction::new(module, qualified_name).with_source_file(file))
}
