//! Relation cardinality resolution.

use indexmap::IndexMap;
use modelts_ir::{Cardinality, ClassName};

use crate::{TypeIndex, framework};

/// Cardinality of framework relation classes.
const KNOWN: &[(&str, Cardinality)] = &[
    (framework::HAS_MANY_THROUGH, Cardinality::Many),
    (framework::HAS_MANY, Cardinality::Many),
    (framework::BELONGS_TO_MANY, Cardinality::Many),
    (framework::MORPH_MANY, Cardinality::Many),
    (framework::MORPH_TO_MANY, Cardinality::Many),
    (framework::HAS_ONE_OR_MANY, Cardinality::SingleOrMany),
    (framework::MORPH_ONE_OR_MANY, Cardinality::SingleOrMany),
    (framework::HAS_ONE, Cardinality::Single),
    (framework::HAS_ONE_THROUGH, Cardinality::Single),
    (framework::HAS_ONE_OR_MANY_THROUGH, Cardinality::Single),
    (framework::BELONGS_TO, Cardinality::Single),
    (framework::MORPH_ONE, Cardinality::Single),
    (framework::MORPH_TO, Cardinality::Single),
];

/// Supplies cardinalities for relation classes the framework does not define.
pub trait RelationCounter {
    fn cardinality(&self, kind: &ClassName) -> Option<Cardinality>;
}

impl RelationCounter for IndexMap<String, Cardinality> {
    fn cardinality(&self, kind: &ClassName) -> Option<Cardinality> {
        self.get(kind.as_str()).copied()
    }
}

/// Which rule produced a cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalitySource {
    /// A framework relation class.
    Builtin,
    /// A custom class extending the one-or-many family.
    OneOrManyFamily,
    /// The injected counter.
    Counter,
    /// Nothing knew the class; assumed single.
    Default,
}

/// A resolved cardinality and how it was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCardinality {
    pub cardinality: Cardinality,
    pub source: CardinalitySource,
}

/// The cardinality of a framework relation class, if `kind` is one.
pub fn known_cardinality(kind: &ClassName) -> Option<Cardinality> {
    KNOWN
        .iter()
        .find(|(class, _)| *class == kind.as_str())
        .map(|(_, cardinality)| *cardinality)
}

/// Resolve how many related records a relation class yields.
///
/// Custom classes extending the one-or-many family resolve to either before
/// the counter is consulted. A class nobody knows resolves to single.
pub fn resolve_cardinality<I, C>(kind: &ClassName, index: &I, counter: &C) -> ResolvedCardinality
where
    I: TypeIndex + ?Sized,
    C: RelationCounter + ?Sized,
{
    let (cardinality, source) = if let Some(cardinality) = known_cardinality(kind) {
        (cardinality, CardinalitySource::Builtin)
    } else if index.is_subclass_of(kind, framework::HAS_ONE_OR_MANY) {
        (Cardinality::SingleOrMany, CardinalitySource::OneOrManyFamily)
    } else if let Some(cardinality) = counter.cardinality(kind) {
        (cardinality, CardinalitySource::Counter)
    } else {
        (Cardinality::Single, CardinalitySource::Default)
    };

    ResolvedCardinality {
        cardinality,
        source,
    }
}

#[cfg(test)]
mod tests {
    use modelts_ir::Snapshot;

    use super::*;
    use crate::testing::SnapshotBuilder;

    fn resolve(kind: &str, index: &Snapshot, counter: &IndexMap<String, Cardinality>) -> ResolvedCardinality {
        resolve_cardinality(&ClassName::new(kind), index, counter)
    }

    #[test]
    fn test_builtin_table() {
        let index = Snapshot::default();
        let counter = IndexMap::new();

        for kind in [
            framework::HAS_MANY,
            framework::HAS_MANY_THROUGH,
            framework::BELONGS_TO_MANY,
            framework::MORPH_MANY,
            framework::MORPH_TO_MANY,
        ] {
            assert_eq!(resolve(kind, &index, &counter).cardinality, Cardinality::Many);
        }

        for kind in [
            framework::HAS_ONE,
            framework::BELONGS_TO,
            framework::MORPH_ONE,
            framework::MORPH_TO,
            framework::HAS_ONE_THROUGH,
        ] {
            assert_eq!(resolve(kind, &index, &counter).cardinality, Cardinality::Single);
        }

        let resolved = resolve(framework::MORPH_ONE_OR_MANY, &index, &counter);
        assert_eq!(resolved.cardinality, Cardinality::SingleOrMany);
        assert_eq!(resolved.source, CardinalitySource::Builtin);
    }

    #[test]
    fn test_one_or_many_family_precedes_counter() {
        let index = SnapshotBuilder::new()
            .class("App\\Relations\\HasSome", "app/Relations/HasSome.php", &[
                framework::HAS_MANY,
            ])
            .build();
        let mut counter = IndexMap::new();
        counter.insert("App\\Relations\\HasSome".to_string(), Cardinality::Many);

        let resolved = resolve("App\\Relations\\HasSome", &index, &counter);
        assert_eq!(resolved.cardinality, Cardinality::SingleOrMany);
        assert_eq!(resolved.source, CardinalitySource::OneOrManyFamily);
    }

    #[test]
    fn test_counter_for_unknown_kind() {
        let mut counter = IndexMap::new();
        counter.insert(
            "Staudenmeir\\EloquentHasManyDeep\\HasManyDeep".to_string(),
            Cardinality::Many,
        );

        let resolved = resolve(
            "\\Staudenmeir\\EloquentHasManyDeep\\HasManyDeep",
            &Snapshot::default(),
            &counter,
        );
        assert_eq!(resolved.cardinality, Cardinality::Many);
        assert_eq!(resolved.source, CardinalitySource::Counter);
    }

    #[test]
    fn test_unknown_kind_defaults_to_single() {
        let resolved = resolve("Vendor\\Relations\\Odd", &Snapshot::default(), &IndexMap::new());
        assert_eq!(resolved.cardinality, Cardinality::Single);
        assert_eq!(resolved.source, CardinalitySource::Default);
    }
}
