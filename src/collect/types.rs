use std::path::PathBuf;

/// Identity of one collected test function, as reported by the host
/// framework's introspection
///
/// `source_file` is `None` when the defining file cannot be determined
/// (e.g. the function is wrapped by a decorator the host cannot see
/// through); path-suffix conditions then evaluate to a non-match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFunction {
    /// Simple function name, e.g. `test_post`
    pub name: String,
    /// Qualified name within the module, e.g. `TestMove.test_post`
    pub qualified_name: String,
    /// Dotted module identifier, e.g. `odoo.addons.account.tests.test_move`
    pub module: String,
    /// Defining file path, when introspection succeeds
    pub source_file: Option<PathBuf>,
}

impl TestFunction {
    /// Create a test function descriptor; the simple name is the last
    /// dot-separated segment of the qualified name
    #[must_use]
    pub fn new(module: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name.as_str())
            .to_string();
        Self {
            name,
            qualified_name,
            module: module.into(),
            source_file: None,
        }
    }

    /// Attach the defining file path
    #[must_use]
    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }
}

/// Shape of a collected item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Plain test function, the only filterable shape
    Function,
    /// Fixture, never filtered
    Fixture,
    /// Class-level or module-level container, never filtered
    Container,
}

/// Marker attached to a collected item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Skip { reason: String },
}

impl Marker {
    #[must_use]
    pub fn skip(reason: impl Into<String>) -> Self {
        Self::Skip {
            reason: reason.into(),
        }
    }
}

/// One item produced by the host framework's collection phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub kind: ItemKind,
    pub function: Option<TestFunction>,
    pub markers: Vec<Marker>,
}

impl TestItem {
    /// A plain test function item
    #[must_use]
    pub fn function(function: TestFunction) -> Self {
        Self {
            kind: ItemKind::Function,
            function: Some(function),
            markers: Vec::new(),
        }
    }

    /// A fixture item
    #[must_use]
    pub fn fixture() -> Self {
        Self {
            kind: ItemKind::Fixture,
            function: None,
            markers: Vec::new(),
        }
    }

    /// A container item
    #[must_use]
    pub fn container() -> Self {
        Self {
            kind: ItemKind::Container,
            function: None,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// True when a skip marker is attached
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.markers
            .iter()
            .any(|marker| matches!(marker, Marker::Skip { .. }))
    }

    /// Reason of the first skip marker, if any
    #[must_use]
    pub fn skip_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|marker| match marker {
            Marker::Skip { reason } => Some(reason.as_str()),
        })
    }
}
