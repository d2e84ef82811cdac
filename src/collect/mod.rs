//! Collection-phase filtering
//!
//! Models the host framework's collected test items and applies the
//! compiled matcher to them: every plain test function that matches gets a
//! skip marker with a fixed reason. Items that are not plain functions
//! (fixtures, class-level containers) are left untouched.

use crate::expr::Matcher;

pub mod types;

pub use types::{ItemKind, Marker, TestFunction, TestItem};

/// Fixed reason attached to every skipped item, not per-tag
pub const SKIP_REASON: &str = "tagged on runbot";

/// Apply skip markers to all matching test functions
///
/// One-shot decision per item with no retries. Returns the number of items
/// marked. This never fails: a function the matcher cannot fully evaluate
/// simply does not match.
pub fn apply_skip_markers(matcher: &Matcher, items: &mut [TestItem]) -> usize {
    let mut skipped = 0;
    for item in items {
        // only function-shaped tests are filterable by this mechanism
        if item.kind != ItemKind::Function {
            continue;
        }
        let matched = item
            .function
            .as_ref()
            .is_some_and(|function| matcher.matches(function));
        if matched {
            item.add_marker(Marker::skip(SKIP_REASON));
            skipped += 1;
        }
    }
    skipped
}
