//! Class names the host framework defines.
//!
//! The snapshot only lists application classes, so the framework's own
//! relation hierarchy is known here and merged into every subclass check.

macro_rules! relation_class {
    ($name:literal) => {
        concat!("Illuminate\\Database\\Eloquent\\Relations\\", $name)
    };
}

/// Base class of every data model.
pub const MODEL: &str = "Illuminate\\Database\\Eloquent\\Model";

/// Return type marking a modern accessor.
pub const ATTRIBUTE: &str = "Illuminate\\Database\\Eloquent\\Casts\\Attribute";

/// Base class of every relation descriptor.
pub const RELATION: &str = relation_class!("Relation");

pub const BELONGS_TO: &str = relation_class!("BelongsTo");
pub const BELONGS_TO_MANY: &str = relation_class!("BelongsToMany");
pub const HAS_MANY: &str = relation_class!("HasMany");
pub const HAS_MANY_THROUGH: &str = relation_class!("HasManyThrough");
pub const HAS_ONE: &str = relation_class!("HasOne");
pub const HAS_ONE_OR_MANY: &str = relation_class!("HasOneOrMany");
pub const HAS_ONE_OR_MANY_THROUGH: &str = relation_class!("HasOneOrManyThrough");
pub const HAS_ONE_THROUGH: &str = relation_class!("HasOneThrough");
pub const MORPH_MANY: &str = relation_class!("MorphMany");
pub const MORPH_ONE: &str = relation_class!("MorphOne");
pub const MORPH_ONE_OR_MANY: &str = relation_class!("MorphOneOrMany");
pub const MORPH_TO: &str = relation_class!("MorphTo");
pub const MORPH_TO_MANY: &str = relation_class!("MorphToMany");

/// Direct parent of each framework relation class.
const PARENTS: &[(&str, &str)] = &[
    (BELONGS_TO, RELATION),
    (BELONGS_TO_MANY, RELATION),
    (HAS_ONE_OR_MANY, RELATION),
    (HAS_ONE_OR_MANY_THROUGH, RELATION),
    (MORPH_TO_MANY, BELONGS_TO_MANY),
    (HAS_ONE, HAS_ONE_OR_MANY),
    (HAS_MANY, HAS_ONE_OR_MANY),
    (MORPH_ONE_OR_MANY, HAS_ONE_OR_MANY),
    (MORPH_ONE, MORPH_ONE_OR_MANY),
    (MORPH_MANY, MORPH_ONE_OR_MANY),
    (HAS_MANY_THROUGH, HAS_ONE_OR_MANY_THROUGH),
    (HAS_ONE_THROUGH, HAS_ONE_OR_MANY_THROUGH),
    (MORPH_TO, BELONGS_TO),
];

/// The framework-defined parent of a class, if it is a framework relation.
pub fn parent_of(class: &str) -> Option<&'static str> {
    PARENTS
        .iter()
        .find(|(child, _)| *child == class)
        .map(|(_, parent)| *parent)
}
