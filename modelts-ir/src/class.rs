//! Fully-qualified class names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between namespace segments in host-language class names.
const SEPARATOR: char = '\\';

/// A fully-qualified class name such as `App\Models\Post`.
///
/// Leading separators are stripped on construction, so `\App\Models\Post`
/// and `App\Models\Post` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(SEPARATOR) {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(name),
        }
    }

    /// The full name, e.g. `App\Models\Post`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace part, e.g. `App\Models`. Empty for global classes.
    pub fn namespace(&self) -> &str {
        match self.0.rfind(SEPARATOR) {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// The short name, e.g. `Post`.
    pub fn short_name(&self) -> &str {
        match self.0.rfind(SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The name with separators normalized to dots, e.g. `App.Models.Post`.
    pub fn dotted(&self) -> String {
        self.0.replace(SEPARATOR, ".")
    }

    /// The namespace with separators normalized to dots, e.g. `App.Models`.
    pub fn dotted_namespace(&self) -> String {
        self.namespace().replace(SEPARATOR, ".")
    }

    /// Whether both classes live in the same namespace.
    pub fn same_namespace(&self, other: &ClassName) -> bool {
        self.namespace() == other.namespace()
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<ClassName> for String {
    fn from(value: ClassName) -> Self {
        value.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
