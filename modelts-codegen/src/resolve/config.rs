use std::fmt;

use indexmap::IndexMap;
use modelts_ir::{Cardinality, TypeDescriptor};
use modelts_manifest::{CollisionPolicy, Config, RelationNaming};

use crate::RelationCounter;

/// Supplies target types for accessor return types the catalog does not know.
pub trait AccessorTypeResolver {
    /// Resolve a class name (without leading separator) to a target type.
    fn resolve(&self, type_name: &str) -> Option<TypeDescriptor>;
}

impl AccessorTypeResolver for IndexMap<String, TypeDescriptor> {
    fn resolve(&self, type_name: &str) -> Option<TypeDescriptor> {
        self.get(type_name).cloned()
    }
}

/// Everything the type resolver needs beyond the type index.
pub struct ResolverConfig {
    /// Type assumed for accessors that declare no return type.
    pub fallback_return_type: String,
    pub accessor_resolver: Box<dyn AccessorTypeResolver>,
    pub relation_counter: Box<dyn RelationCounter>,
    pub relation_names: RelationNaming,
    pub member_collision: CollisionPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ResolverConfig {
    fn from(config: &Config) -> Self {
        Self {
            fallback_return_type: config.custom_attributes.fallback_return_type.trim().to_string(),
            accessor_resolver: Box::new(config.accessor_resolvers()),
            relation_counter: Box::new(config.relation_counters()),
            relation_names: config.relation_names,
            member_collision: config.member_collision,
        }
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("fallback_return_type", &self.fallback_return_type)
            .field("relation_names", &self.relation_names)
            .field("member_collision", &self.member_collision)
            .finish_non_exhaustive()
    }
}

impl ResolverConfig {
    pub fn with_accessor_resolver(mut self, resolver: impl AccessorTypeResolver + 'static) -> Self {
        self.accessor_resolver = Box::new(resolver);
        self
    }

    pub fn with_relation_counter(mut self, counter: impl RelationCounter + 'static) -> Self {
        self.relation_counter = Box::new(counter);
        self
    }

    pub fn with_relation_names(mut self, naming: RelationNaming) -> Self {
        self.relation_names = naming;
        self
    }

    pub fn with_member_collision(mut self, policy: CollisionPolicy) -> Self {
        self.member_collision = policy;
        self
    }
}

/// Convenience for tests and library callers building a counter inline.
pub fn counter_table<'a>(
    entries: impl IntoIterator<Item = (&'a str, Cardinality)>,
) -> IndexMap<String, Cardinality> {
    entries
        .into_iter()
        .map(|(class, cardinality)| (class.trim_start_matches('\\').to_string(), cardinality))
        .collect()
}
