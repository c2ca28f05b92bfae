//! Test utilities for the generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use modelts_ir::{
    AccessorProbe, ClassEntry, ClassName, ColumnDescriptor, EnumCase, EnumDefinition, Literal,
    MethodEntry, ModelEntry, RelationTarget, Snapshot, TypeShape,
};

use crate::framework;

/// Builds a [`Snapshot`] fixture without writing JSON by hand.
///
/// # Example
///
/// ```
/// use modelts_codegen::testing::{ModelBuilder, SnapshotBuilder};
///
/// let snapshot = SnapshotBuilder::new()
///     .model(ModelBuilder::new("App\\Models\\Post").column("id", "integer", false))
///     .build();
/// assert_eq!(snapshot.classes.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: ModelBuilder) -> Self {
        let (class, entry) = model.build();
        self.snapshot.classes.insert(class, entry);
        self
    }

    /// A plain class with explicit ancestors.
    pub fn class(mut self, name: &str, path: &str, parents: &[&str]) -> Self {
        self.snapshot.classes.insert(
            ClassName::new(name),
            ClassEntry {
                path: Some(PathBuf::from(path)),
                parents: parents.iter().map(|p| ClassName::new(*p)).collect(),
                model: None,
            },
        );
        self
    }

    /// A backed enumeration.
    pub fn enumeration(mut self, name: &str, cases: &[(&str, Literal)]) -> Self {
        let cases = cases
            .iter()
            .map(|(case, value)| EnumCase {
                name: (*case).to_string(),
                value: Some(value.clone()),
            })
            .collect();
        self.snapshot
            .enums
            .insert(ClassName::new(name), EnumDefinition { cases });
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// Builds one model class entry.
#[derive(Debug)]
pub struct ModelBuilder {
    class: ClassName,
    path: PathBuf,
    parents: Vec<ClassName>,
    columns: Vec<ColumnDescriptor>,
    schema_error: Option<String>,
    entry: ModelEntry,
}

impl ModelBuilder {
    /// A model extending the framework base, at the conventional path for its name.
    pub fn new(class: &str) -> Self {
        let class = ClassName::new(class);
        Self {
            path: conventional_path(&class),
            class,
            parents: vec![ClassName::new(framework::MODEL)],
            columns: Vec::new(),
            schema_error: None,
            entry: ModelEntry::default(),
        }
    }

    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    pub fn column(mut self, name: &str, type_name: &str, nullable: bool) -> Self {
        self.columns
            .push(ColumnDescriptor::new(name, type_name, nullable));
        self
    }

    pub fn hidden(mut self, name: &str) -> Self {
        self.entry.hidden.push(name.to_string());
        self
    }

    pub fn cast(mut self, column: &str, cast: &str) -> Self {
        self.entry
            .casts
            .insert(column.to_string(), cast.to_string());
        self
    }

    /// Column introspection failed with the given message.
    pub fn schema_error(mut self, message: &str) -> Self {
        self.schema_error = Some(message.to_string());
        self
    }

    pub fn method(mut self, name: &str, returns: Option<TypeShape>) -> Self {
        self.entry.methods.push(MethodEntry {
            name: name.to_string(),
            returns,
            accessor: None,
            relation: None,
        });
        self
    }

    /// A `get{Name}Attribute` accessor.
    pub fn legacy_accessor(self, name: &str, returns: Option<TypeShape>) -> Self {
        self.method(name, returns)
    }

    /// An accessor returning the attribute wrapper, with its probe result.
    pub fn modern_accessor(mut self, name: &str, probe: AccessorProbe) -> Self {
        self.entry.methods.push(MethodEntry {
            name: name.to_string(),
            returns: Some(TypeShape::named(framework::ATTRIBUTE)),
            accessor: Some(probe),
            relation: None,
        });
        self
    }

    /// A relation member declaring `kind` as its return type.
    pub fn relation(mut self, name: &str, kind: &str, related: &str) -> Self {
        self.entry.methods.push(MethodEntry {
            name: name.to_string(),
            returns: Some(TypeShape::named(kind)),
            accessor: None,
            relation: Some(RelationTarget {
                related: ClassName::new(related),
                kind: ClassName::new(kind),
            }),
        });
        self
    }

    pub fn build(self) -> (ClassName, ClassEntry) {
        let mut entry = self.entry;
        entry.columns = match self.schema_error {
            Some(_) => None,
            None => Some(self.columns),
        };
        entry.schema_error = self.schema_error;

        (
            self.class,
            ClassEntry {
                path: Some(self.path),
                parents: self.parents,
                model: Some(entry),
            },
        )
    }
}

/// `App\Models\Post` lives at `app/Models/Post.php`.
fn conventional_path(class: &ClassName) -> PathBuf {
    let mut segments = class.as_str().split('\\');
    let mut path = PathBuf::new();
    if let Some(root) = segments.next() {
        path.push(root.to_ascii_lowercase());
    }
    for segment in segments {
        path.push(segment);
    }
    path.set_extension("php");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_path() {
        assert_eq!(
            conventional_path(&ClassName::new("App\\Models\\Post")),
            PathBuf::from("app/Models/Post.php")
        );
    }

    #[test]
    fn test_schema_error_clears_columns() {
        let (_, entry) = ModelBuilder::new("App\\Models\\Post")
            .column("id", "integer", false)
            .schema_error("boom")
            .build();
        let model = entry.model.unwrap();
        assert!(model.columns.is_none());
        assert_eq!(model.schema_error.as_deref(), Some("boom"));
    }
}
