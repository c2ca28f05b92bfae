//! TypeScript type expressions for resolved members.

use std::collections::HashSet;

use indexmap::IndexMap;
use modelts_ir::{
    Cardinality, ClassName, InterfaceBlock, MemberDefinition, TypeDescriptor, TypeName,
};
use modelts_manifest::ReferenceStyle;

use crate::ast::{ImportAlias, InterfaceField};

/// How model references render within one emission scope.
///
/// Models in the referencing model's own namespace use their short name.
/// Others use an import alias when one was assigned, else their dotted
/// fully-qualified name. A global model whose short name is taken by an
/// interface or alias of the scope is reached through `globalThis`.
#[derive(Debug, Clone, Default)]
pub struct References {
    aliases: IndexMap<ClassName, String>,
    /// Short names declared by the scope's namespaced interfaces.
    locals: HashSet<String>,
}

impl References {
    /// References that always qualify cross-namespace models.
    pub fn qualified() -> Self {
        Self::default()
    }

    /// Build the references for the interfaces emitted in one scope.
    ///
    /// With [`ReferenceStyle::Alias`], each cross-namespace model gets an
    /// alias named after its short name, unless that name is already used
    /// by an interface or same-namespace reference in the scope, or by an
    /// alias for a different model. Those stay qualified.
    pub fn for_scope<'a>(
        style: ReferenceStyle,
        blocks: impl IntoIterator<Item = &'a InterfaceBlock> + Clone,
    ) -> Self {
        let locals = blocks
            .clone()
            .into_iter()
            .filter(|block| !block.model.namespace().is_empty())
            .map(|block| block.name().to_string())
            .collect();
        let aliases = match style {
            ReferenceStyle::Qualified => IndexMap::new(),
            ReferenceStyle::Alias => assign_aliases(blocks),
        };
        Self { aliases, locals }
    }

    /// Import aliases to emit before the scope's interfaces.
    pub fn imports(&self) -> impl Iterator<Item = ImportAlias> + '_ {
        self.aliases
            .iter()
            .map(|(class, alias)| ImportAlias::new(alias.clone(), class.dotted()))
    }

    /// The name `from` uses to refer to `target`.
    pub fn model(&self, from: &ClassName, target: &ClassName) -> String {
        if target.same_namespace(from) {
            return target.short_name().to_string();
        }
        if let Some(alias) = self.aliases.get(target) {
            return alias.clone();
        }
        let short = target.short_name();
        if target.namespace().is_empty() && self.is_shadowed(short) {
            format!("globalThis.{}", short)
        } else {
            target.dotted()
        }
    }

    fn is_shadowed(&self, short: &str) -> bool {
        self.locals.contains(short) || self.aliases.values().any(|alias| alias == short)
    }
}

fn assign_aliases<'a>(
    blocks: impl IntoIterator<Item = &'a InterfaceBlock> + Clone,
) -> IndexMap<ClassName, String> {
    let mut reserved: HashSet<&str> = HashSet::new();
    for block in blocks.clone() {
        reserved.insert(block.name());
        for target in model_targets(block) {
            if target.same_namespace(&block.model) {
                reserved.insert(target.short_name());
            }
        }
    }

    let mut aliases: IndexMap<ClassName, String> = IndexMap::new();
    for block in blocks {
        for target in model_targets(block) {
            // Global models need no alias.
            if target.namespace().is_empty()
                || target.same_namespace(&block.model)
                || aliases.contains_key(target)
            {
                continue;
            }
            let short = target.short_name();
            if reserved.contains(short) || aliases.values().any(|alias| alias == short) {
                continue;
            }
            aliases.insert(target.clone(), short.to_string());
        }
    }
    aliases
}

fn model_targets(block: &InterfaceBlock) -> impl Iterator<Item = &ClassName> {
    block
        .members
        .iter()
        .flat_map(|member| member.types.iter())
        .filter_map(|ty| match &ty.name {
            TypeName::Model(class) => Some(class),
            _ => None,
        })
}

/// Renders member definitions of one interface as interface fields.
pub struct TypeRenderer<'a> {
    model: &'a ClassName,
    references: &'a References,
    comments: bool,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(model: &'a ClassName, references: &'a References) -> Self {
        Self {
            model,
            references,
            comments: false,
        }
    }

    /// Emit type comments as JSDoc above fields.
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Render one type alternative, cardinality included.
    pub fn descriptor(&self, ty: &TypeDescriptor) -> String {
        let base = match &ty.name {
            TypeName::Primitive(name) => name.clone(),
            TypeName::Literals(values) if values.is_empty() => "never".to_string(),
            TypeName::Literals(values) => values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | "),
            TypeName::Model(class) => self.references.model(self.model, class),
        };

        match ty.cardinality {
            Cardinality::Single => base,
            Cardinality::Many => array_of(&base),
            Cardinality::SingleOrMany => format!("{} | {}", base, array_of(&base)),
        }
    }

    /// The full type of a member: deduplicated alternatives, plus `null`
    /// unless the member is required.
    pub fn member_type(&self, member: &MemberDefinition) -> String {
        let mut alternatives: Vec<String> = Vec::with_capacity(member.types.len() + 1);
        for ty in &member.types {
            let rendered = self.descriptor(ty);
            if !alternatives.contains(&rendered) {
                alternatives.push(rendered);
            }
        }
        if alternatives.is_empty() {
            alternatives.push("unknown".to_string());
        }
        if !member.required && !alternatives.iter().any(|alt| alt == "null") {
            alternatives.push("null".to_string());
        }
        alternatives.join(" | ")
    }

    /// The interface field for a member.
    pub fn field(&self, member: &MemberDefinition) -> InterfaceField {
        let mut field = InterfaceField::new(member.name.clone(), self.member_type(member));
        if member.optional {
            field = field.optional();
        }
        let doc = if self.comments { member_doc(member) } else { None };
        if let Some(doc) = doc {
            field = field.doc(doc);
        }
        field
    }
}

fn array_of(base: &str) -> String {
    if base.contains('|') || base.contains('&') || base.contains("=>") {
        format!("({})[]", base)
    } else {
        format!("{}[]", base)
    }
}

fn member_doc(member: &MemberDefinition) -> Option<String> {
    let mut comments: Vec<&str> = Vec::new();
    for comment in member.types.iter().filter_map(|ty| ty.comment.as_deref()) {
        if !comments.contains(&comment) {
            comments.push(comment);
        }
    }
    (!comments.is_empty()).then(|| comments.join(", "))
}
