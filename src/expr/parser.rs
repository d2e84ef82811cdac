use std::sync::OnceLock;

use regex::Regex;

use super::types::{ModuleSpec, TagExpr};

/// Full-string grammar for one tag expression
///
/// The tagging service automatically prepends `-` to disable a test. The
/// three components are all optional: `/module/path` (word characters,
/// dots and slashes), `:Class` and `.method` (word characters).
fn tag_re() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(r"^-(?:/(?P<module>[\w/.]+))?(?::(?P<class>\w+))?(?:\.(?P<method>\w+))?$")
            .expect("tag expression grammar is a valid regex")
    })
}

/// Parse one raw tag expression
///
/// Returns `None` for strings that fail the full-string match (the service
/// may legitimately emit strings of another form, so this is not an error)
/// and for expressions with no components, which constrain nothing.
#[must_use]
pub fn parse_expr(raw: &str) -> Option<TagExpr> {
    let captures = tag_re().captures(raw)?;
    let expr = TagExpr {
        module: captures.name("module").map(|m| ModuleSpec::new(m.as_str())),
        class: captures.name("class").map(|m| m.as_str().to_string()),
        method: captures.name("method").map(|m| m.as_str().to_string()),
    };
    if expr.is_empty() { None } else { Some(expr) }
}

/// Parse a raw comma-separated tag list as served by the tagging service
///
/// The body is trimmed of surrounding whitespace before splitting.
/// Unparseable entries are silently dropped.
#[must_use]
pub fn parse_tag_list(body: &str) -> Vec<TagExpr> {
    body.trim().split(',').filter_map(parse_expr).collect()
}
