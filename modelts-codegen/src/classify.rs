//! Member classification.
//!
//! Rules are checked in order and depend only on a member's name and the
//! shape of its declared return type:
//!
//! 1. `get{Name}Attribute` with a non-empty `{Name}` is a legacy accessor.
//! 2. A union return type is never a modern accessor or a relation.
//! 3. A return type naming the attribute wrapper is a modern accessor.
//! 4. A single class return type extending the relation base is a relation.
//! 5. Anything else is not part of the interface.

use modelts_core::to_snake_case;
use modelts_ir::{MemberDescriptor, MemberKind, TypeShape};

use crate::{TypeIndex, framework};

const LEGACY_PREFIX: &str = "get";
const LEGACY_SUFFIX: &str = "Attribute";

/// A member that contributes a property to the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMember {
    /// The member as declared on the model.
    pub member: String,
    pub kind: MemberKind,
    /// Property name derived from the member name.
    pub property: String,
}

/// Classify a member, or `None` when it is not an interface member.
pub fn classify<I>(member: &MemberDescriptor, index: &I) -> Option<ClassifiedMember>
where
    I: TypeIndex + ?Sized,
{
    let classified = |kind, property: String| ClassifiedMember {
        member: member.name.clone(),
        kind,
        property,
    };

    if let Some(name) = legacy_property(&member.name) {
        return Some(classified(MemberKind::LegacyAccessor, to_snake_case(name)));
    }

    let named = match member.returns.as_ref()? {
        TypeShape::Named(named) => named,
        TypeShape::Union { .. } => return None,
    };

    if named.type_name() == framework::ATTRIBUTE {
        return Some(classified(
            MemberKind::ModernAccessor,
            to_snake_case(&member.name),
        ));
    }

    let class = named.class()?;
    if index.is_subclass_of(&class, framework::RELATION) {
        return Some(classified(MemberKind::Relation, member.name.clone()));
    }

    None
}

/// The `{Name}` segment of a `get{Name}Attribute` member.
fn legacy_property(name: &str) -> Option<&str> {
    name.strip_prefix(LEGACY_PREFIX)?
        .strip_suffix(LEGACY_SUFFIX)
        .filter(|middle| !middle.is_empty())
}
