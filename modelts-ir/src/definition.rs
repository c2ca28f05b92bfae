//! Resolved member definitions, ready for rendering.

use std::fmt;

use serde::Serialize;

use crate::{ClassName, TypeDescriptor};

/// Where a member came from on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A physical table column.
    Column,
    /// A `get{Name}Attribute` style computed attribute.
    LegacyAccessor,
    /// A member returning an attribute object.
    ModernAccessor,
    /// A relation-declaring member.
    Relation,
}

impl MemberKind {
    pub fn is_accessor(&self) -> bool {
        matches!(self, MemberKind::LegacyAccessor | MemberKind::ModernAccessor)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberKind::Column => "column",
            MemberKind::LegacyAccessor => "legacy accessor",
            MemberKind::ModernAccessor => "modern accessor",
            MemberKind::Relation => "relation",
        };
        f.write_str(label)
    }
}

/// One property of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDefinition {
    /// Property name as emitted.
    pub name: String,
    pub kind: MemberKind,
    /// Type alternatives, rendered joined by `|`.
    pub types: Vec<TypeDescriptor>,
    /// When false, the rendered type gains a `| null` alternative.
    pub required: bool,
    /// When true, the property is rendered with `?:`.
    pub optional: bool,
}

impl MemberDefinition {
    pub fn new(name: impl Into<String>, kind: MemberKind, types: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            kind,
            types,
            required: true,
            optional: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// All members of one model, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceBlock {
    pub model: ClassName,
    pub members: Vec<MemberDefinition>,
}

impl InterfaceBlock {
    pub fn new(model: ClassName) -> Self {
        Self {
            model,
            members: Vec::new(),
        }
    }

    /// Interface name, the model's short name.
    pub fn name(&self) -> &str {
        self.model.short_name()
    }

    /// Dotted namespace the interface is declared in.
    pub fn namespace(&self) -> String {
        self.model.dotted_namespace()
    }

    pub fn member(&self, name: &str) -> Option<&MemberDefinition> {
        self.members.iter().find(|member| member.name == name)
    }
}
