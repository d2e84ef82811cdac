//! Session-scoped tag state
//!
//! A [`Session`] is built once during the host framework's configuration
//! phase and passed by reference into every subsequent collection step.
//! Construction never fails: fetch errors fall back to the cache and cache
//! errors degrade to an empty tag set, so the filtering feature cannot
//! crash test collection. Worst case nothing is filtered, or the report
//! header shows stale cached tags.

use tracing::{debug, warn};

use crate::collect::{self, TestItem};
use crate::config::AutotagsConfig;
use crate::expr::{Matcher, TagExpr, parse_tag_list};
use crate::source::{CachedTags, TagCache, TagSource};

/// Compiled per-session tag state: the matcher plus aligned display labels
///
/// `labels()[i]` always corresponds to the i-th compiled expression.
#[derive(Debug, Clone, Default)]
pub struct Session {
    labels: Vec<String>,
    matcher: Matcher,
}

impl Session {
    /// Build the session state for one test run
    ///
    /// Fetches the raw tag list, parses it and persists the parsed result
    /// so the next session without connectivity can still filter. On fetch
    /// failure the last cached list is used instead.
    pub fn configure(config: &AutotagsConfig, source: &dyn TagSource, cache: &TagCache) -> Self {
        match source.fetch() {
            Ok(body) => {
                let exprs = parse_tag_list(&body);
                let cached = CachedTags::now(exprs);
                if let Err(err) = cache.set(&cached) {
                    warn!("failed to persist fetched tags: {err}");
                }
                Self::from_exprs(&cached.exprs, &config.namespace)
            }
            Err(err) => {
                debug!("tag fetch failed, falling back to cache: {err}");
                Self::from_cache(config, cache)
            }
        }
    }

    /// Build the session from the cache alone (offline path)
    ///
    /// A missing or unreadable cache yields an empty session.
    pub fn from_cache(config: &AutotagsConfig, cache: &TagCache) -> Self {
        let exprs = match cache.get() {
            Ok(Some(cached)) => cached.exprs,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read cached tags: {err}");
                Vec::new()
            }
        };
        Self::from_exprs(&exprs, &config.namespace)
    }

    /// Build the session from a raw tag list, bypassing source and cache
    #[must_use]
    pub fn from_raw(body: &str, namespace: &str) -> Self {
        Self::from_exprs(&parse_tag_list(body), namespace)
    }

    /// Build the session from already-parsed expressions
    #[must_use]
    pub fn from_exprs(exprs: &[TagExpr], namespace: &str) -> Self {
        let labels = exprs
            .iter()
            .filter(|expr| !expr.is_empty())
            .map(|expr| expr.label(namespace))
            .collect();
        Self {
            labels,
            matcher: Matcher::compile(exprs, namespace),
        }
    }

    /// Empty session for runs where filtering is disabled, e.g. when the
    /// host is only printing help
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Number of active tag expressions
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.labels.len()
    }

    /// Display labels, aligned with the compiled expressions
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The compiled matcher
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// One-line summary for the host framework's report header
    #[must_use]
    pub fn report_header(&self) -> String {
        format!(
            "autotags ({}): not ({})",
            self.labels.len(),
            self.labels.join(" or ")
        )
    }

    /// Apply skip markers to all matching collected items
    ///
    /// Returns the number of items marked.
    pub fn filter(&self, items: &mut [TestItem]) -> usize {
        collect::apply_skip_markers(&self.matcher, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingSource, StaticSource, function_item, temp_cache};

    const NS: &str = "odoo.addons";

    fn config() -> AutotagsConfig {
        AutotagsConfig::default()
    }

    #[test]
    fn test_empty_session_report_header() {
        let session = Session::from_raw("", NS);
        assert_eq!(session.tag_count(), 0);
        assert_eq!(session.report_header(), "autotags (0): not ()");
    }

    #[test]
    fn test_report_header_joins_labels_with_or() {
        let session = Session::from_raw("-/foo/bar:Baz.qux,-:TestOther", NS);
        assert_eq!(
            session.report_header(),
            "autotags (2): not (odoo/addons/foo/bar::Baz::qux or ::TestOther)"
        );
    }

    #[test]
    fn test_labels_stay_aligned_with_matcher() {
        // one malformed entry, one valid: only the valid one contributes
        let session = Session::from_raw("garbage,-:TestMove", NS);
        assert_eq!(session.tag_count(), 1);
        assert_eq!(session.labels(), ["::TestMove"]);
        assert_eq!(session.matcher().len(), 1);
    }

    #[test]
    fn test_configure_parses_and_caches_fetched_list() {
        let (cache, _dir) = temp_cache();
        let source = StaticSource::new("-/foo/bar:Baz.qux,-:TestOther");

        let session = Session::configure(&config(), &source, &cache);

        assert_eq!(session.tag_count(), 2);
        let cached = cache.get().unwrap().unwrap();
        assert_eq!(cached.exprs.len(), 2);
    }

    #[test]
    fn test_configure_falls_back_to_cache_on_fetch_failure() {
        let (cache, _dir) = temp_cache();

        // populate the cache through a successful session first
        let source = StaticSource::new("-:TestMove");
        Session::configure(&config(), &source, &cache);

        let session = Session::configure(&config(), &FailingSource, &cache);

        assert_eq!(session.tag_count(), 1);
        assert_eq!(session.labels(), ["::TestMove"]);
        let mut items = vec![function_item("m", "TestMove.test_post")];
        assert_eq!(session.filter(&mut items), 1);
    }

    #[test]
    fn test_configure_with_failure_and_empty_cache() {
        let (cache, _dir) = temp_cache();

        let session = Session::configure(&config(), &FailingSource, &cache);

        assert_eq!(session.tag_count(), 0);
        assert_eq!(session.report_header(), "autotags (0): not ()");
    }

    #[test]
    fn test_fetched_list_replaces_stale_cache() {
        let (cache, _dir) = temp_cache();

        Session::configure(&config(), &StaticSource::new("-:TestOld"), &cache);
        let session = Session::configure(&config(), &StaticSource::new("-:TestNew"), &cache);

        assert_eq!(session.labels(), ["::TestNew"]);
        let cached = cache.get().unwrap().unwrap();
        assert_eq!(cached.exprs[0].class.as_deref(), Some("TestNew"));
    }

    #[test]
    fn test_filter_marks_only_matching_functions() {
        let session = Session::from_raw("-:TestMove", NS);
        let mut items = vec![
            function_item("odoo.addons.account.tests.test_move", "TestMove.test_post"),
            function_item("odoo.addons.account.tests.test_move", "TestTax.test_rate"),
        ];

        assert_eq!(session.filter(&mut items), 1);
        assert!(items[0].is_skipped());
        assert!(!items[1].is_skipped());
    }

    #[test]
    fn test_filter_on_path_suffix_expression() {
        use crate::testing::function_item_in_file;

        let session = Session::from_raw("-/account/tests/test_move.py", NS);
        let mut items = vec![
            function_item_in_file(
                "odoo.addons.account.tests.test_move",
                "TestMove.test_post",
                "/src/odoo/addons/account/tests/test_move.py",
            ),
            // no source file known: path condition is a non-match
            function_item("odoo.addons.account.tests.test_move", "TestMove.test_post"),
        ];

        assert_eq!(session.filter(&mut items), 1);
        assert!(items[0].is_skipped());
        assert!(!items[1].is_skipped());
    }

    #[test]
    fn test_disabled_session_filters_nothing() {
        let session = Session::disabled();
        let mut items = vec![function_item("m", "TestMove.test_post")];
        assert_eq!(session.filter(&mut items), 0);
    }
}
