//! Resolved target-type descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ClassName;

/// How many related records a type stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    #[serde(rename = "one", alias = "single")]
    Single,
    /// A collection of values.
    #[serde(rename = "many")]
    Many,
    /// Either one value or a collection.
    #[serde(rename = "one_or_many", alias = "single_or_many")]
    SingleOrMany,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "one",
            Cardinality::Many => "many",
            Cardinality::SingleOrMany => "one_or_many",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value in a literal union (enum backing values).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Str(value) => {
                let quoted = serde_json::to_string(value).map_err(|_| fmt::Error)?;
                // Line and paragraph separators pass through JSON unescaped.
                f.write_str(
                    &quoted
                        .replace('\u{2028}', "\\u2028")
                        .replace('\u{2029}', "\\u2029"),
                )
            }
        }
    }
}

/// The name part of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeName {
    /// A target-language primitive or inline type expression (`number`, `Blob`, ...).
    Primitive(String),
    /// A union of literal values.
    Literals(Vec<Literal>),
    /// A reference to another model's interface.
    Model(ClassName),
}

/// A resolved target type: name, cardinality and an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub cardinality: Cardinality,
    pub comment: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            cardinality: Cardinality::Single,
            comment: None,
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeName::Primitive(name.into()))
    }

    pub fn number() -> Self {
        Self::primitive("number")
    }

    pub fn string() -> Self {
        Self::primitive("string")
    }

    pub fn boolean() -> Self {
        Self::primitive("boolean")
    }

    pub fn any() -> Self {
        Self::primitive("any")
    }

    pub fn unknown() -> Self {
        Self::primitive("unknown")
    }

    pub fn null() -> Self {
        Self::primitive("null")
    }

    /// An open string-keyed record of unknown values.
    pub fn record() -> Self {
        Self::primitive("Record<string, unknown>")
    }

    /// An array of unknown values.
    pub fn array() -> Self {
        Self::unknown().with_cardinality(Cardinality::Many)
    }

    pub fn literals(values: Vec<Literal>) -> Self {
        Self::new(TypeName::Literals(values))
    }

    pub fn model(class: ClassName) -> Self {
        Self::new(TypeName::Model(class))
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The primitive name, if this is a primitive type.
    pub fn primitive_name(&self) -> Option<&str> {
        match &self.name {
            TypeName::Primitive(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this type degraded to `any`.
    pub fn is_any(&self) -> bool {
        self.primitive_name() == Some("any")
    }
}
