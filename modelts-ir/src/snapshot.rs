//! Descriptors exported by the host framework's reflection step.
//!
//! A [`Snapshot`] is the complete, pre-computed answer to every question the
//! generator asks the host framework: which classes exist and where, their
//! ancestry, each model's columns, casts and member signatures, and the
//! results of probing modern accessors and relation members.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ClassName, Literal};

/// Builtin type keywords of the host language.
const BUILTIN_TYPES: &[&str] = &[
    "int", "integer", "float", "double", "string", "bool", "boolean", "array", "object", "null",
    "mixed", "void", "iterable", "callable", "never", "false", "true",
];

/// The full reflection dump of a host application.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Snapshot {
    /// Every class the exporter saw, models and non-models alike.
    #[serde(default)]
    pub classes: IndexMap<ClassName, ClassEntry>,

    /// Enumerations keyed by class name.
    #[serde(default)]
    pub enums: IndexMap<ClassName, EnumDefinition>,
}

/// One class in the snapshot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassEntry {
    /// Source file declaring the class, relative to the project root.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Ancestor classes, nearest first.
    #[serde(default)]
    pub parents: Vec<ClassName>,

    /// Model metadata, present for data-model classes only.
    #[serde(default)]
    pub model: Option<ModelEntry>,
}

/// Model-specific metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelEntry {
    /// Columns hidden from serialization; never emitted.
    #[serde(default)]
    pub hidden: Vec<String>,

    /// Declared casts, column name to cast specification.
    #[serde(default)]
    pub casts: IndexMap<String, String>,

    /// Physical columns in declaration order. `None` when introspection failed.
    #[serde(default)]
    pub columns: Option<Vec<ColumnDescriptor>>,

    /// Error reported by schema introspection, if any.
    #[serde(default)]
    pub schema_error: Option<String>,

    /// Member functions in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

/// One physical column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,

    /// Raw storage type name, e.g. `integer` or `varchar(255)`.
    #[serde(alias = "type")]
    pub type_name: String,

    #[serde(default)]
    pub nullable: bool,

    /// Declared cast for this column, filled in from the model's casts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
            cast: None,
        }
    }

    pub fn with_cast(mut self, cast: impl Into<String>) -> Self {
        self.cast = Some(cast.into());
        self
    }
}

/// A member function as exported, including probe results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MethodEntry {
    pub name: String,

    /// Declared return type; `None` when the member declares none.
    #[serde(default)]
    pub returns: Option<TypeShape>,

    /// Result of probing a modern accessor's getter closure.
    #[serde(default)]
    pub accessor: Option<AccessorProbe>,

    /// Result of invoking a relation-declaring member.
    #[serde(default)]
    pub relation: Option<RelationTarget>,
}

impl MethodEntry {
    /// The language-neutral view used for classification.
    pub fn descriptor(&self) -> MemberDescriptor {
        MemberDescriptor {
            name: self.name.clone(),
            returns: self.returns.clone(),
        }
    }
}

/// Name and declared return-type shape of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: String,
    pub returns: Option<TypeShape>,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, returns: Option<TypeShape>) -> Self {
        Self {
            name: name.into(),
            returns,
        }
    }
}

/// The getter closure signature behind a modern accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessorProbe {
    #[serde(default)]
    pub returns: Option<TypeShape>,
}

/// What a relation-declaring member returned when invoked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelationTarget {
    /// The related model class.
    pub related: ClassName,
    /// The runtime relation class.
    pub kind: ClassName,
}

/// A declared return type: a single named type or a union.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    Named(NamedType),
    Union { types: Vec<NamedType> },
}

impl TypeShape {
    pub fn named(name: impl Into<String>) -> Self {
        TypeShape::Named(NamedType::new(name))
    }

    pub fn union(types: impl IntoIterator<Item = NamedType>) -> Self {
        TypeShape::Union {
            types: types.into_iter().collect(),
        }
    }

    /// Each alternative of the type, in declaration order.
    pub fn arms(&self) -> &[NamedType] {
        match self {
            TypeShape::Named(named) => std::slice::from_ref(named),
            TypeShape::Union { types } => types,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TypeShape::Union { .. })
    }

    /// The single named type, if this is not a union.
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeShape::Named(named) => Some(named),
            TypeShape::Union { .. } => None,
        }
    }

    /// Whether a null value satisfies this type.
    pub fn allows_null(&self) -> bool {
        self.arms().iter().any(NamedType::allows_null)
    }
}

/// One named type, e.g. `string`, `?int` or `App\Models\User`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedType {
    pub name: String,

    #[serde(default)]
    pub nullable: bool,

    /// Whether this is a builtin type. Inferred from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            builtin: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The name with nullable shorthand and leading separators removed.
    pub fn type_name(&self) -> &str {
        self.name.trim_start_matches('?').trim_start_matches('\\')
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin.unwrap_or_else(|| {
            let name = self.type_name().to_ascii_lowercase();
            BUILTIN_TYPES.contains(&name.as_str())
        })
    }

    pub fn is_null(&self) -> bool {
        self.type_name().eq_ignore_ascii_case("null")
    }

    pub fn allows_null(&self) -> bool {
        self.nullable
            || self.name.starts_with('?')
            || self.is_null()
            || self.type_name().eq_ignore_ascii_case("mixed")
    }

    /// The class this type names, for non-builtin types.
    pub fn class(&self) -> Option<ClassName> {
        if self.is_builtin() {
            None
        } else {
            Some(ClassName::new(self.type_name()))
        }
    }
}

/// An enumeration's cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumDefinition {
    #[serde(default)]
    pub cases: Vec<EnumCase>,
}

/// One enumeration case; unit cases have no backing value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumCase {
    pub name: String,
    #[serde(default)]
    pub value: Option<Literal>,
}

impl EnumCase {
    /// The value a serialized instance of this case carries.
    pub fn literal(&self) -> Literal {
        self.value
            .clone()
            .unwrap_or_else(|| Literal::Str(self.name.clone()))
    }
}
