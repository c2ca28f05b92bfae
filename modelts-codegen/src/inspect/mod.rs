//! Model inspection: gathering a model's columns and classified members.

mod snapshot;
mod source;

use modelts_ir::{ClassName, ColumnDescriptor, MemberKind, RelationTarget, TypeShape};
pub use source::{ModelSource, TypeIndex};
use tracing::trace;

use crate::{ClassifiedMember, InspectError, Result, classify};

/// An accessor and its effective declared return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedAccessor {
    pub member: ClassifiedMember,
    /// For modern accessors, the getter closure's return type.
    pub returns: Option<TypeShape>,
}

/// A relation and what invoking it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedRelation {
    pub member: ClassifiedMember,
    pub target: RelationTarget,
}

/// Everything known about one model, ready for type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionResult {
    pub model: ClassName,
    /// Visible columns with their declared casts attached.
    pub columns: Vec<ColumnDescriptor>,
    /// Accessors in declaration order.
    pub accessors: Vec<InspectedAccessor>,
    /// Relations in declaration order.
    pub relations: Vec<InspectedRelation>,
}

/// Inspects one model at a time against a [`ModelSource`].
///
/// # Example
///
/// ```ignore
/// let result = ModelInspector::new(&snapshot)
///     .inspection_for(ClassName::new("App\\Models\\Post"))
///     .inspect()?;
/// ```
pub struct ModelInspector<'a, S: ?Sized> {
    source: &'a S,
    model: Option<ClassName>,
}

impl<'a, S> ModelInspector<'a, S>
where
    S: ModelSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            model: None,
        }
    }

    /// Target a model for the next inspection.
    pub fn inspection_for(mut self, model: ClassName) -> Self {
        self.model = Some(model);
        self
    }

    /// The targeted model, if any.
    pub fn model(&self) -> Option<&ClassName> {
        self.model.as_ref()
    }

    /// Inspect the targeted model.
    ///
    /// Modern accessors and relations are probed through the source once each.
    pub fn inspect(&self) -> Result<InspectionResult> {
        let model = self.model.as_ref().ok_or(InspectError::NoModelTargeted)?;
        if !self.source.is_model(model) {
            return Err(InspectError::InvalidModel {
                class: model.clone(),
            });
        }

        let casts = self.source.casts(model)?;
        let columns = self
            .source
            .columns(model)?
            .into_iter()
            .map(|mut column| {
                if column.cast.is_none() {
                    column.cast = casts.get(&column.name).cloned();
                }
                column
            })
            .collect();

        let mut accessors = Vec::new();
        let mut relations = Vec::new();
        for descriptor in self.source.members(model)? {
            let Some(member) = classify(&descriptor, self.source) else {
                continue;
            };
            trace!(model = %model, member = %member.member, kind = %member.kind, "classified member");

            match member.kind {
                MemberKind::LegacyAccessor => accessors.push(InspectedAccessor {
                    member,
                    returns: descriptor.returns,
                }),
                MemberKind::ModernAccessor => {
                    let returns = self.source.accessor_return_type(model, &descriptor.name)?;
                    accessors.push(InspectedAccessor { member, returns });
                }
                MemberKind::Relation => {
                    let target = self.source.relation_target(model, &descriptor.name)?;
                    relations.push(InspectedRelation { member, target });
                }
                MemberKind::Column => {}
            }
        }

        Ok(InspectionResult {
            model: model.clone(),
            columns,
            accessors,
            relations,
        })
    }
}
