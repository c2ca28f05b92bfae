//! The boundary between the generator and the host framework.

use std::path::Path;

use indexmap::IndexMap;
use modelts_ir::{
    ClassName, ColumnDescriptor, EnumDefinition, MemberDescriptor, RelationTarget, TypeShape,
};

use crate::{Result, framework};

/// Answers questions about the host application's class hierarchy.
pub trait TypeIndex {
    /// Whether `class` strictly extends `ancestor`, directly or transitively.
    fn is_subclass_of(&self, class: &ClassName, ancestor: &str) -> bool;

    /// The enumeration declared under `class`, if it is one.
    fn enum_definition(&self, class: &ClassName) -> Option<&EnumDefinition>;

    fn is_model(&self, class: &ClassName) -> bool {
        self.is_subclass_of(class, framework::MODEL)
    }
}

/// Supplies everything the generator needs to know about models.
///
/// `accessor_return_type` and `relation_target` stand for the two steps that
/// require invoking a member on a model instance. Implementations backed by
/// a live application perform that call; the snapshot implementation reads
/// results recorded at export time.
pub trait ModelSource: TypeIndex {
    /// Models declared under any of `source_dirs`, deduplicated, in a stable order.
    fn list_models(&self, source_dirs: &[&Path]) -> Vec<ClassName>;

    /// Physical columns in declaration order, hidden columns excluded.
    fn columns(&self, model: &ClassName) -> Result<Vec<ColumnDescriptor>>;

    /// Member functions in declaration order.
    fn members(&self, model: &ClassName) -> Result<Vec<MemberDescriptor>>;

    /// Declared casts, column name to cast specification.
    fn casts(&self, model: &ClassName) -> Result<IndexMap<String, String>>;

    /// Return type of the getter closure behind a modern accessor.
    fn accessor_return_type(&self, model: &ClassName, member: &str) -> Result<Option<TypeShape>>;

    /// Related model and runtime relation class of a relation member.
    fn relation_target(&self, model: &ClassName, member: &str) -> Result<RelationTarget>;
}
