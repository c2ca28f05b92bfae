//! Type resolution: inspected members to interface member definitions.

mod config;

use indexmap::IndexMap;
use modelts_core::{
    cast_keyword, resolve_cast_keyword, resolve_column_type, resolve_enum, resolve_primitive,
    to_snake_case,
};
use modelts_ir::{
    ClassName, ColumnDescriptor, InterfaceBlock, MemberDefinition, MemberKind, NamedType,
    TypeDescriptor, TypeShape,
};
use modelts_manifest::{CollisionPolicy, RelationNaming};

pub use config::{AccessorTypeResolver, ResolverConfig, counter_table};

use crate::{
    CardinalitySource, InspectError, InspectedAccessor, InspectedRelation, InspectionResult,
    Result, TypeIndex, resolve_cardinality,
};

/// A resolved member and anything worth telling the user about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub definition: MemberDefinition,
    pub warnings: Vec<String>,
}

impl Resolved {
    fn new(definition: MemberDefinition) -> Self {
        Self {
            definition,
            warnings: Vec::new(),
        }
    }
}

/// A model's interface and the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub interface: InterfaceBlock,
    pub warnings: Vec<String>,
}

/// Resolves inspected members against the type catalog.
///
/// All configuration is passed in at construction; resolution never reads
/// global state.
pub struct TypeResolver<'a, I: ?Sized> {
    index: &'a I,
    config: &'a ResolverConfig,
}

impl<'a, I> TypeResolver<'a, I>
where
    I: TypeIndex + ?Sized,
{
    pub fn new(index: &'a I, config: &'a ResolverConfig) -> Self {
        Self { index, config }
    }

    /// Build the interface for one inspected model.
    ///
    /// Members are ordered columns first, then accessors, then relations.
    pub fn resolve_model(&self, inspection: &InspectionResult) -> Result<ResolvedModel> {
        let model = &inspection.model;
        let mut resolved = Vec::new();

        for column in &inspection.columns {
            resolved.push(self.resolve_column(column));
        }
        for accessor in &inspection.accessors {
            resolved.push(self.resolve_accessor(model, accessor)?);
        }
        for relation in &inspection.relations {
            resolved.push(self.resolve_relation(relation));
        }

        assemble(model, resolved, self.config.member_collision)
    }

    /// A column member: required when NOT NULL, never optional.
    pub fn resolve_column(&self, column: &ColumnDescriptor) -> Resolved {
        let mut warnings = Vec::new();
        let ty = match column.cast.as_deref() {
            Some(cast) => self.resolve_cast(cast).unwrap_or_else(|| {
                warnings.push(format!(
                    "column '{}' has unknown cast '{}', emitted as any",
                    column.name, cast
                ));
                TypeDescriptor::any()
            }),
            None => resolve_column_type(&column.type_name),
        };

        let definition = MemberDefinition::new(&column.name, MemberKind::Column, vec![ty])
            .required(!column.nullable)
            .optional(false);
        Resolved {
            definition,
            warnings,
        }
    }

    /// An accessor member: always optional, required unless its type admits null.
    pub fn resolve_accessor(
        &self,
        model: &ClassName,
        accessor: &InspectedAccessor,
    ) -> Result<Resolved> {
        let property = &accessor.member.property;
        let (shape, declared) = match &accessor.returns {
            Some(shape) => (shape.clone(), true),
            None => (TypeShape::named(self.config.fallback_return_type.as_str()), false),
        };

        let mut types: Vec<TypeDescriptor> = Vec::new();
        let mut warnings = Vec::new();
        for arm in shape.arms() {
            if arm.type_name().trim().is_empty() {
                return Err(InspectError::reflection(
                    model,
                    &accessor.member.member,
                    "return type has an empty name",
                ));
            }
            // Null only affects nullability.
            if arm.is_null() {
                continue;
            }
            let ty = self.resolve_named(arm).unwrap_or_else(|| {
                warnings.push(format!(
                    "accessor '{}' returns unknown type '{}', emitted as any",
                    property,
                    arm.type_name()
                ));
                TypeDescriptor::any()
            });
            if !types.contains(&ty) {
                types.push(ty);
            }
        }

        let required = if types.is_empty() {
            types.push(TypeDescriptor::null());
            true
        } else {
            !declared || !shape.allows_null()
        };

        let definition = MemberDefinition::new(property, accessor.member.kind, types)
            .required(required)
            .optional(true);
        Ok(Resolved {
            definition,
            warnings,
        })
    }

    /// A relation member: always optional and nullable.
    pub fn resolve_relation(&self, relation: &InspectedRelation) -> Resolved {
        let target = &relation.target;
        let resolved = resolve_cardinality(
            &target.kind,
            self.index,
            self.config.relation_counter.as_ref(),
        );

        let name = match self.config.relation_names {
            RelationNaming::Preserve => relation.member.property.clone(),
            RelationNaming::Snake => to_snake_case(&relation.member.property),
        };
        let ty = TypeDescriptor::model(target.related.clone()).with_cardinality(resolved.cardinality);
        let definition = MemberDefinition::new(name, MemberKind::Relation, vec![ty])
            .required(false)
            .optional(true);

        let mut result = Resolved::new(definition);
        if resolved.source == CardinalitySource::Default {
            result.warnings.push(format!(
                "relation '{}' has unknown kind '{}', assumed single",
                relation.member.property, target.kind
            ));
        }
        result
    }

    /// A column cast: an enumeration, a built-in keyword, or a class name.
    fn resolve_cast(&self, cast: &str) -> Option<TypeDescriptor> {
        let class = ClassName::new(cast_keyword(cast));
        if let Some(definition) = self.index.enum_definition(&class) {
            return Some(resolve_enum(Some(definition)));
        }
        if let Some(ty) = resolve_cast_keyword(cast) {
            return Some(ty);
        }
        self.resolve_named(&NamedType::new(class.as_str()))
    }

    /// One declared type. `None` when nothing knows the type.
    fn resolve_named(&self, named: &NamedType) -> Option<TypeDescriptor> {
        if named.is_builtin() {
            return Some(resolve_primitive(named.type_name()));
        }

        let class = ClassName::new(named.type_name());
        if let Some(definition) = self.index.enum_definition(&class) {
            return Some(resolve_enum(Some(definition)));
        }
        if self.index.is_model(&class) {
            return Some(TypeDescriptor::model(class));
        }
        self.config.accessor_resolver.resolve(class.as_str())
    }
}

/// Merge resolved members into one interface, keyed by property name.
fn assemble(
    model: &ClassName,
    resolved: Vec<Resolved>,
    policy: CollisionPolicy,
) -> Result<ResolvedModel> {
    let mut members: IndexMap<String, MemberDefinition> = IndexMap::new();
    let mut warnings = Vec::new();

    for Resolved {
        definition,
        warnings: member_warnings,
    } in resolved
    {
        warnings.extend(member_warnings);

        match members.get_mut(&definition.name) {
            Some(existing) => match policy {
                CollisionPolicy::Error => {
                    return Err(InspectError::MemberCollision {
                        model: model.clone(),
                        property: definition.name,
                        first: existing.kind,
                        second: definition.kind,
                    });
                }
                CollisionPolicy::Override => {
                    warnings.push(format!(
                        "{} '{}' overrides the {} of the same name",
                        definition.kind, definition.name, existing.kind
                    ));
                    *existing = definition;
                }
            },
            None => {
                members.insert(definition.name.clone(), definition);
            }
        }
    }

    let mut interface = InterfaceBlock::new(model.clone());
    interface.members = members.into_values().collect();
    Ok(ResolvedModel {
        interface,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use modelts_ir::{Cardinality, Literal, RelationTarget, Snapshot, TypeName};

    use super::*;
    use crate::{ClassifiedMember, framework, testing::SnapshotBuilder};

    fn accessor(kind: MemberKind, property: &str, returns: Option<TypeShape>) -> InspectedAccessor {
        InspectedAccessor {
            member: ClassifiedMember {
                member: property.to_string(),
                kind,
                property: property.to_string(),
            },
            returns,
        }
    }

    fn relation(name: &str, kind: &str, related: &str) -> InspectedRelation {
        InspectedRelation {
            member: ClassifiedMember {
                member: name.to_string(),
                kind: MemberKind::Relation,
                property: name.to_string(),
            },
            target: RelationTarget {
                related: ClassName::new(related),
                kind: ClassName::new(kind),
            },
        }
    }

    fn post() -> ClassName {
        ClassName::new("App\\Models\\Post")
    }

    fn statuses() -> Snapshot {
        SnapshotBuilder::new()
            .enumeration("App\\Enums\\Status", &[
                ("Active", Literal::Str("active".into())),
                ("Inactive", Literal::Str("inactive".into())),
            ])
            .build()
    }

    #[test]
    fn test_column_nullability() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let id = resolver.resolve_column(&ColumnDescriptor::new("id", "integer", false));
        assert_eq!(id.definition.types, vec![TypeDescriptor::number()]);
        assert!(id.definition.required);
        assert!(!id.definition.optional);

        let title = resolver.resolve_column(&ColumnDescriptor::new("title", "varchar(255)", true));
        assert_eq!(title.definition.types[0].primitive_name(), Some("string"));
        assert!(!title.definition.required);
        assert!(!title.definition.optional);
    }

    #[test]
    fn test_enum_cast_column() {
        let index = statuses();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let column = ColumnDescriptor::new("status", "varchar", false).with_cast("App\\Enums\\Status");
        let resolved = resolver.resolve_column(&column);
        assert_eq!(
            resolved.definition.types[0].name,
            TypeName::Literals(vec![
                Literal::Str("active".into()),
                Literal::Str("inactive".into()),
            ])
        );
    }

    #[test]
    fn test_keyword_cast_column() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let price = ColumnDescriptor::new("price", "varchar", false).with_cast("decimal:2");
        assert_eq!(
            resolver.resolve_column(&price).definition.types,
            vec![TypeDescriptor::number()]
        );

        let published = ColumnDescriptor::new("published_at", "varchar", true).with_cast("datetime");
        let resolved = resolver.resolve_column(&published);
        assert_eq!(resolved.definition.types[0].primitive_name(), Some("string"));
        assert!(!resolved.definition.required);
    }

    #[test]
    fn test_class_cast_uses_accessor_resolvers() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let column = ColumnDescriptor::new("starts_at", "varchar", false).with_cast("Carbon\\Carbon");
        assert_eq!(
            resolver.resolve_column(&column).definition.types,
            vec![TypeDescriptor::string().with_comment("datetime mutable")]
        );

        let column = ColumnDescriptor::new("options", "json", false).with_cast("App\\Casts\\Options");
        let resolved = resolver.resolve_column(&column);
        assert!(resolved.definition.types[0].is_any());
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn test_accessor_union_with_null() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let returns = TypeShape::union([
            NamedType::new("int"),
            NamedType::new("float"),
            NamedType::new("null"),
        ]);
        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::ModernAccessor, "score", Some(returns)))
            .unwrap();

        assert_eq!(resolved.definition.types, vec![TypeDescriptor::number()]);
        assert!(!resolved.definition.required);
        assert!(resolved.definition.optional);
    }

    #[test]
    fn test_accessor_without_return_type_uses_fallback() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::LegacyAccessor, "excerpt", None))
            .unwrap();
        assert_eq!(resolved.definition.types, vec![TypeDescriptor::string()]);
        assert!(resolved.definition.required);
        assert!(resolved.definition.optional);
    }

    #[test]
    fn test_accessor_model_and_enum_types() {
        let index = SnapshotBuilder::new()
            .model(crate::testing::ModelBuilder::new("App\\Models\\User"))
            .enumeration("App\\Enums\\Status", &[("Active", Literal::Str("active".into()))])
            .build();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let returns = TypeShape::Named(NamedType::new("App\\Models\\User").nullable());
        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::LegacyAccessor, "owner", Some(returns)))
            .unwrap();
        assert_eq!(
            resolved.definition.types,
            vec![TypeDescriptor::model(ClassName::new("App\\Models\\User"))]
        );
        assert!(!resolved.definition.required);

        let returns = TypeShape::named("\\App\\Enums\\Status");
        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::LegacyAccessor, "state", Some(returns)))
            .unwrap();
        assert_eq!(
            resolved.definition.types[0].name,
            TypeName::Literals(vec![Literal::Str("active".into())])
        );
    }

    #[test]
    fn test_unknown_accessor_type_degrades_to_any() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let returns = TypeShape::named("Vendor\\Thing");
        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::ModernAccessor, "thing", Some(returns)))
            .unwrap();
        assert!(resolved.definition.types[0].is_any());
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn test_custom_accessor_resolver() {
        let index = Snapshot::default();
        let mut table = IndexMap::new();
        table.insert("Money\\Money".to_string(), TypeDescriptor::number());
        let config = ResolverConfig::default().with_accessor_resolver(table);
        let resolver = TypeResolver::new(&index, &config);

        let returns = TypeShape::named("Money\\Money");
        let resolved = resolver
            .resolve_accessor(&post(), &accessor(MemberKind::ModernAccessor, "price", Some(returns)))
            .unwrap();
        assert_eq!(resolved.definition.types, vec![TypeDescriptor::number()]);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_empty_type_name_is_reflection_error() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let result = resolver.resolve_accessor(
            &post(),
            &accessor(MemberKind::ModernAccessor, "broken", Some(TypeShape::named(""))),
        );
        assert!(matches!(result, Err(InspectError::Reflection { .. })));
    }

    #[test]
    fn test_null_only_accessor() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let resolved = resolver
            .resolve_accessor(
                &post(),
                &accessor(MemberKind::ModernAccessor, "nothing", Some(TypeShape::named("null"))),
            )
            .unwrap();
        assert_eq!(resolved.definition.types, vec![TypeDescriptor::null()]);
        assert!(resolved.definition.required);
    }

    #[test]
    fn test_relation_has_many() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let resolved =
            resolver.resolve_relation(&relation("comments", framework::HAS_MANY, "App\\Models\\Comment"));
        let definition = resolved.definition;
        assert_eq!(definition.name, "comments");
        assert_eq!(
            definition.types,
            vec![
                TypeDescriptor::model(ClassName::new("App\\Models\\Comment"))
                    .with_cardinality(Cardinality::Many)
            ]
        );
        assert!(!definition.required);
        assert!(definition.optional);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_relation_snake_naming_and_default_warning() {
        let index = Snapshot::default();
        let config = ResolverConfig::default().with_relation_names(RelationNaming::Snake);
        let resolver = TypeResolver::new(&index, &config);

        let resolved =
            resolver.resolve_relation(&relation("blogAuthor", "Vendor\\Odd", "App\\Models\\User"));
        assert_eq!(resolved.definition.name, "blog_author");
        assert_eq!(resolved.definition.types[0].cardinality, Cardinality::Single);
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn test_resolve_model_orders_members() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let inspection = InspectionResult {
            model: post(),
            columns: vec![
                ColumnDescriptor::new("id", "integer", false),
                ColumnDescriptor::new("title", "varchar", true),
            ],
            accessors: vec![accessor(
                MemberKind::LegacyAccessor,
                "excerpt",
                Some(TypeShape::named("string")),
            )],
            relations: vec![relation("comments", framework::HAS_MANY, "App\\Models\\Comment")],
        };

        let resolved = resolver.resolve_model(&inspection).unwrap();
        let names: Vec<_> = resolved
            .interface
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "title", "excerpt", "comments"]);
    }

    #[test]
    fn test_collision_is_an_error_by_default() {
        let index = Snapshot::default();
        let config = ResolverConfig::default();
        let resolver = TypeResolver::new(&index, &config);

        let inspection = InspectionResult {
            model: post(),
            columns: vec![ColumnDescriptor::new("title", "varchar", false)],
            accessors: vec![accessor(MemberKind::LegacyAccessor, "title", None)],
            relations: vec![],
        };

        match resolver.resolve_model(&inspection) {
            Err(InspectError::MemberCollision {
                property,
                first,
                second,
                ..
            }) => {
                assert_eq!(property, "title");
                assert_eq!(first, MemberKind::Column);
                assert_eq!(second, MemberKind::LegacyAccessor);
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_override_keeps_position() {
        let index = Snapshot::default();
        let config = ResolverConfig::default().with_member_collision(CollisionPolicy::Override);
        let resolver = TypeResolver::new(&index, &config);

        let inspection = InspectionResult {
            model: post(),
            columns: vec![
                ColumnDescriptor::new("title", "varchar", false),
                ColumnDescriptor::new("id", "integer", false),
            ],
            accessors: vec![accessor(
                MemberKind::LegacyAccessor,
                "title",
                Some(TypeShape::named("int")),
            )],
            relations: vec![],
        };

        let resolved = resolver.resolve_model(&inspection).unwrap();
        let title = &resolved.interface.members[0];
        assert_eq!(title.name, "title");
        assert_eq!(title.kind, MemberKind::LegacyAccessor);
        assert!(title.optional);
        assert_eq!(resolved.warnings.len(), 1);
    }
}
