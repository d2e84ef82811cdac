use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Module component of a tag expression
///
/// A segment containing a `/` is a filesystem path suffix; one without is a
/// dotted package name resolved under the configured namespace. A package
/// name with no dots (single segment) is allowed.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ModuleSpec {
    /// Suffix of the test function's defining file path
    PathSuffix(String),
    /// Package name prefix under the namespace, e.g. `account` or `stock.picking`
    Package(String),
}

impl ModuleSpec {
    /// Classify a raw module segment by the presence of a `/`
    #[must_use]
    pub fn new(segment: &str) -> Self {
        if segment.contains('/') {
            Self::PathSuffix(segment.to_string())
        } else {
            Self::Package(segment.to_string())
        }
    }

    /// The raw segment as written in the tag expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PathSuffix(s) | Self::Package(s) => s.as_str(),
        }
    }
}

/// One parsed tag expression
///
/// A conjunction (AND) of up to three atomic conditions, one per present
/// component. An absent component does not constrain on that component.
/// The parser never produces an expression with all three absent.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TagExpr {
    /// Module condition: file path suffix or namespaced package prefix
    pub module: Option<ModuleSpec>,
    /// Class condition: qualified name must start with `<class>.`
    pub class: Option<String>,
    /// Method condition: simple name must equal this string
    pub method: Option<String>,
}

impl TagExpr {
    /// True when no component is present (the expression constrains nothing)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.module.is_none() && self.class.is_none() && self.method.is_none()
    }

    /// Reconstruct the display label for this expression
    ///
    /// Labels are used only for reporting, never for matching. The module
    /// part renders under the namespace written as a path, with a trailing
    /// `/*` for package-style segments; class and method render as `::`
    /// separated suffixes.
    #[must_use]
    pub fn label(&self, namespace: &str) -> String {
        let mut label = String::new();
        if let Some(module) = &self.module {
            let prefix = namespace.replace('.', "/");
            match module {
                ModuleSpec::PathSuffix(s) => {
                    label.push_str(&format!("{prefix}/{s}"));
                }
                ModuleSpec::Package(p) => {
                    label.push_str(&format!("{prefix}/{p}/*"));
                }
            }
        }
        if let Some(class) = &self.class {
            label.push_str(&format!("::{class}"));
        }
        if let Some(method) = &self.method {
            label.push_str(&format!("::{method}"));
        }
        label
    }
}
