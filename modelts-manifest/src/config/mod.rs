//! Configuration types and parsing for modelts.toml files.

mod parse;
mod validate;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use modelts_ir::{Cardinality, TypeDescriptor};
use serde::Deserialize;

pub use parse::parse_config;
pub use validate::find_key_span;

/// Accessor return types every project gets unless it overrides them.
const DEFAULT_ACCESSOR_RESOLVERS: &[(&str, &str, &str)] = &[
    ("Carbon\\CarbonImmutable", "string", "datetime immutable"),
    ("Carbon\\Carbon", "string", "datetime mutable"),
    ("Illuminate\\Support\\Carbon", "string", "datetime mutable"),
];

/// Relation classes outside the framework with a known cardinality.
const DEFAULT_CUSTOM_RELATIONS: &[(&str, Cardinality)] = &[(
    "Staudenmeir\\EloquentHasManyDeep\\HasManyDeep",
    Cardinality::Many,
)];

/// Starter configuration written by `modelts init`.
pub const CONFIG_TEMPLATE: &str = r#"# Reflection dump exported by the host application
snapshot = "storage/modelts/snapshot.json"

# Directories holding model classes (string or array)
source_dir = "app/Models"

# Where the generated declarations are written
output_path = "resources/js/types/models.d.ts"

# Wrap interfaces in `declare namespace` blocks
declare_namespace = true

# Cross-namespace model references: "qualified" or "alias"
references = "qualified"

# Relation property names: "preserve" or "snake"
relation_names = "preserve"

# Same-named members: "error" or "override"
member_collision = "error"

# Emit type comments as JSDoc above members
comments = false

# Emit the generated-file banner
header = true

[custom_attributes]
# Type used when an accessor declares no return type
fallback_return_type = "string"

[custom_attributes.accessor_resolvers]
# "Money\\Money" = "number"
# "Carbon\\CarbonImmutable" = { type = "string", comment = "datetime immutable" }

[custom_relations]
# "Staudenmeir\\EloquentHasManyDeep\\HasManyDeep" = "many"
"#;

/// Root configuration for modelts.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the model snapshot
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Directories models are discovered under
    #[serde(default)]
    pub source_dir: SourceDirs,

    /// Destination of the generated declarations
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_true")]
    pub declare_namespace: bool,

    #[serde(default)]
    pub references: ReferenceStyle,

    #[serde(default)]
    pub relation_names: RelationNaming,

    #[serde(default)]
    pub member_collision: CollisionPolicy,

    /// Render type comments as JSDoc
    #[serde(default)]
    pub comments: bool,

    /// Render the generated-file banner
    #[serde(default = "default_true")]
    pub header: bool,

    #[serde(default)]
    pub custom_attributes: CustomAttributes,

    /// Cardinality of relation classes unknown to the framework
    #[serde(default, alias = "counter")]
    pub custom_relations: IndexMap<String, Cardinality>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            source_dir: SourceDirs::default(),
            output_path: default_output_path(),
            declare_namespace: true,
            references: ReferenceStyle::default(),
            relation_names: RelationNaming::default(),
            member_collision: CollisionPolicy::default(),
            comments: false,
            header: true,
            custom_attributes: CustomAttributes::default(),
            custom_relations: IndexMap::new(),
        }
    }
}

impl Config {
    /// Accessor type overrides: the built-in defaults extended by the user's table.
    pub fn accessor_resolvers(&self) -> IndexMap<String, TypeDescriptor> {
        let mut resolvers: IndexMap<String, TypeDescriptor> = DEFAULT_ACCESSOR_RESOLVERS
            .iter()
            .map(|(class, ty, comment)| {
                (
                    (*class).to_string(),
                    TypeDescriptor::primitive(*ty).with_comment(*comment),
                )
            })
            .collect();
        for (class, resolver) in &self.custom_attributes.accessor_resolvers {
            resolvers.insert(normalize_class(class), resolver.to_descriptor());
        }
        resolvers
    }

    /// Relation cardinalities: the built-in defaults extended by the user's table.
    pub fn relation_counters(&self) -> IndexMap<String, Cardinality> {
        let mut counters: IndexMap<String, Cardinality> = DEFAULT_CUSTOM_RELATIONS
            .iter()
            .map(|(class, cardinality)| ((*class).to_string(), *cardinality))
            .collect();
        for (class, cardinality) in &self.custom_relations {
            counters.insert(normalize_class(class), *cardinality);
        }
        counters
    }

    /// Resolve the snapshot and output paths against a project root.
    ///
    /// Source directories stay project-relative; they are matched against
    /// the class paths recorded in the snapshot.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.snapshot = root.join(&self.snapshot);
        self.output_path = root.join(&self.output_path);
        self
    }
}

fn normalize_class(class: &str) -> String {
    class.trim_start_matches('\\').to_string()
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("storage/modelts/snapshot.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("resources/js/types/models.d.ts")
}

fn default_true() -> bool {
    true
}

fn default_fallback_return_type() -> String {
    "string".to_string()
}

/// One or more source directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourceDirs {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl Default for SourceDirs {
    fn default() -> Self {
        SourceDirs::One(PathBuf::from("app/Models"))
    }
}

impl SourceDirs {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            SourceDirs::One(path) => vec![path.as_path()],
            SourceDirs::Many(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }
}

/// How a model in another namespace is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStyle {
    /// Dotted fully-qualified name inline.
    #[default]
    Qualified,
    /// An `import Short = Dotted.Name;` alias before the interface.
    Alias,
}

/// How relation property names are derived from member names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationNaming {
    /// The member name as declared.
    #[default]
    Preserve,
    /// The member name in snake_case.
    Snake,
}

/// What happens when two members resolve to the same property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Abort generation.
    #[default]
    Error,
    /// The later member replaces the earlier one.
    Override,
}

/// The `[custom_attributes]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomAttributes {
    /// Type used when an accessor declares no return type
    #[serde(default = "default_fallback_return_type")]
    pub fallback_return_type: String,

    /// Target types for accessor return types the catalog does not know
    #[serde(default)]
    pub accessor_resolvers: IndexMap<String, AccessorResolver>,
}

impl Default for CustomAttributes {
    fn default() -> Self {
        Self {
            fallback_return_type: default_fallback_return_type(),
            accessor_resolvers: IndexMap::new(),
        }
    }
}

/// A target type for one accessor return type, with an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AccessorResolver {
    Type(String),
    Detailed {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(default)]
        comment: Option<String>,
    },
}

impl AccessorResolver {
    pub fn type_name(&self) -> &str {
        match self {
            AccessorResolver::Type(name) => name,
            AccessorResolver::Detailed { type_name, .. } => type_name,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            AccessorResolver::Type(_) => None,
            AccessorResolver::Detailed { comment, .. } => comment.as_deref(),
        }
    }

    pub fn to_descriptor(&self) -> TypeDescriptor {
        let descriptor = TypeDescriptor::primitive(self.type_name().trim());
        match self.comment() {
            Some(comment) => descriptor.with_comment(comment),
            None => descriptor,
        }
    }
}
