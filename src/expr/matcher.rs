use crate::collect::TestFunction;

use super::types::{ModuleSpec, TagExpr};

/// Compiled matcher over a set of tag expressions
///
/// Semantically the OR over all per-expression AND conditions. Expressions
/// are compiled once per session rather than re-interpreted per test item:
/// the matcher runs once for every collected test and sessions can carry
/// thousands of items, so each comparison string (class prefix, package
/// prefix) is precomputed here.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    exprs: Vec<CompiledExpr>,
}

#[derive(Debug, Clone)]
struct CompiledExpr {
    module: Option<ModuleCond>,
    class_prefix: Option<String>,
    method: Option<String>,
}

#[derive(Debug, Clone)]
enum ModuleCond {
    FileSuffix(String),
    PackagePrefix(String),
}

impl Matcher {
    /// Compile tag expressions into a single matcher
    ///
    /// `namespace` is the dotted prefix under which package-style module
    /// segments resolve (e.g. `odoo.addons`). An empty expression list
    /// compiles to a constant-false matcher.
    #[must_use]
    pub fn compile(exprs: &[TagExpr], namespace: &str) -> Self {
        let exprs = exprs
            .iter()
            .filter(|expr| !expr.is_empty())
            .map(|expr| CompiledExpr::new(expr, namespace))
            .collect();
        Self { exprs }
    }

    /// Evaluate the matcher against one test function
    ///
    /// Returns true when any expression matches. With no expressions this
    /// is always false, so no test is ever skipped.
    #[must_use]
    pub fn matches(&self, function: &TestFunction) -> bool {
        self.exprs.iter().any(|expr| expr.matches(function))
    }

    /// Number of compiled expressions
    #[must_use]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl CompiledExpr {
    fn new(expr: &TagExpr, namespace: &str) -> Self {
        let module = expr.module.as_ref().map(|spec| match spec {
            ModuleSpec::PathSuffix(s) => ModuleCond::FileSuffix(s.clone()),
            // trailing dot prevents partial package-name collisions,
            // `foo` must not match `foobar`
            ModuleSpec::Package(p) => ModuleCond::PackagePrefix(format!("{namespace}.{p}.")),
        });
        Self {
            module,
            class_prefix: expr.class.as_ref().map(|c| format!("{c}.")),
            method: expr.method.clone(),
        }
    }

    fn matches(&self, function: &TestFunction) -> bool {
        self.method
            .as_ref()
            .is_none_or(|m| function.name == *m)
            && self
                .class_prefix
                .as_ref()
                .is_none_or(|p| function.qualified_name.starts_with(p.as_str()))
            && self.module.as_ref().is_none_or(|m| m.matches(function))
    }
}

impl ModuleCond {
    fn matches(&self, function: &TestFunction) -> bool {
        match self {
            // an unknown source file is a non-match, never an error
            Self::FileSuffix(suffix) => function
                .source_file
                .as_deref()
                .is_some_and(|path| path.to_string_lossy().ends_with(suffix.as_str())),
            Self::PackagePrefix(prefix) => function.module.starts_with(prefix.as_str()),
        }
    }
}
