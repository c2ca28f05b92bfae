//! [`ModelSource`] backed by an exported model snapshot.

use std::{
    collections::HashSet,
    path::{Component, Path},
};

use indexmap::IndexMap;
use modelts_ir::{
    ClassName, ColumnDescriptor, EnumDefinition, MemberDescriptor, MethodEntry, ModelEntry,
    RelationTarget, Snapshot, TypeShape,
};

use super::{ModelSource, TypeIndex};
use crate::{InspectError, Result, framework};

impl TypeIndex for Snapshot {
    fn is_subclass_of(&self, class: &ClassName, ancestor: &str) -> bool {
        let target = ClassName::new(ancestor);
        let mut visited = HashSet::new();
        let mut pending = vec![class.clone()];

        while let Some(current) = pending.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for parent in direct_parents(self, &current) {
                if parent == target {
                    return true;
                }
                pending.push(parent);
            }
        }

        false
    }

    fn enum_definition(&self, class: &ClassName) -> Option<&EnumDefinition> {
        self.enums.get(class)
    }
}

impl ModelSource for Snapshot {
    fn list_models(&self, source_dirs: &[&Path]) -> Vec<ClassName> {
        let dirs: Vec<_> = source_dirs.iter().map(|dir| components(dir)).collect();

        self.classes
            .iter()
            .filter(|(_, entry)| {
                entry.path.as_deref().is_some_and(|path| {
                    let path = components(path);
                    dirs.iter().any(|dir| path.starts_with(dir))
                })
            })
            .map(|(class, _)| class)
            .filter(|class| self.is_model(class))
            .cloned()
            .collect()
    }

    fn columns(&self, model: &ClassName) -> Result<Vec<ColumnDescriptor>> {
        let entry = model_entry(self, model)?;
        let columns = entry
            .columns
            .as_ref()
            .ok_or_else(|| InspectError::SchemaIntrospection {
                model: model.clone(),
                reason: entry
                    .schema_error
                    .clone()
                    .unwrap_or_else(|| "no column metadata was exported".to_string()),
            })?;

        Ok(columns
            .iter()
            .filter(|column| !entry.hidden.contains(&column.name))
            .cloned()
            .collect())
    }

    fn members(&self, model: &ClassName) -> Result<Vec<MemberDescriptor>> {
        let entry = model_entry(self, model)?;
        Ok(entry.methods.iter().map(MethodEntry::descriptor).collect())
    }

    fn casts(&self, model: &ClassName) -> Result<IndexMap<String, String>> {
        Ok(model_entry(self, model)?.casts.clone())
    }

    fn accessor_return_type(&self, model: &ClassName, member: &str) -> Result<Option<TypeShape>> {
        let method = method(self, model, member)?;
        let probe = method
            .accessor
            .as_ref()
            .ok_or_else(|| InspectError::reflection(model, member, "accessor was not probed"))?;
        Ok(probe.returns.clone())
    }

    fn relation_target(&self, model: &ClassName, member: &str) -> Result<RelationTarget> {
        method(self, model, member)?
            .relation
            .clone()
            .ok_or_else(|| InspectError::reflection(model, member, "relation was not resolved"))
    }
}

/// Parents recorded in the snapshot plus the framework's own hierarchy.
fn direct_parents(snapshot: &Snapshot, class: &ClassName) -> Vec<ClassName> {
    let mut parents = snapshot
        .classes
        .get(class)
        .map(|entry| entry.parents.clone())
        .unwrap_or_default();
    if let Some(parent) = framework::parent_of(class.as_str()) {
        parents.push(ClassName::new(parent));
    }
    parents
}

fn model_entry<'a>(snapshot: &'a Snapshot, model: &ClassName) -> Result<&'a ModelEntry> {
    snapshot
        .classes
        .get(model)
        .and_then(|entry| entry.model.as_ref())
        .filter(|_| snapshot.is_model(model))
        .ok_or_else(|| InspectError::InvalidModel {
            class: model.clone(),
        })
}

fn method<'a>(snapshot: &'a Snapshot, model: &ClassName, member: &str) -> Result<&'a MethodEntry> {
    model_entry(snapshot, model)?
        .methods
        .iter()
        .find(|method| method.name == member)
        .ok_or_else(|| InspectError::reflection(model, member, "member does not exist"))
}

fn components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
