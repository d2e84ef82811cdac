//! Tag expression parsing and matcher compilation
//!
//! A tag expression is a compact, dash-prefixed string identifying a test
//! or group of tests to exclude, e.g. `-/account/tests:TestMove.test_post`.
//! Each expression parses into a [`TagExpr`] record of up to three optional
//! components (module, class, method); all expressions for a session are
//! compiled together into a single [`Matcher`] evaluated once per collected
//! test function.

pub mod matcher;
pub mod parser;
pub mod types;

pub use matcher::Matcher;
pub use parser::{parse_expr, parse_tag_list};
pub use types::{ModuleSpec, TagExpr};
