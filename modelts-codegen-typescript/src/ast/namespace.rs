//! Ambient namespace declaration builder.

use modelts_codegen::builder::{CodeFragment, Renderable};

use super::ImportAlias;

/// Builder for `declare namespace X { ... }` blocks.
///
/// Import aliases open the block, followed by the body elements separated by
/// blank lines.
#[derive(Debug, Clone, Default)]
pub struct NamespaceBlock {
    name: String,
    imports: Vec<ImportAlias>,
    body: Vec<Vec<CodeFragment>>,
}

impl NamespaceBlock {
    /// Create a block for a dotted namespace name, e.g. `App.Models`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add import aliases; duplicates are ignored.
    pub fn imports(mut self, imports: impl IntoIterator<Item = ImportAlias>) -> Self {
        for import in imports {
            if !self.imports.contains(&import) {
                self.imports.push(import);
            }
        }
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }
}

impl Renderable for NamespaceBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let imports: Vec<CodeFragment> =
            self.imports.iter().flat_map(ImportAlias::to_fragments).collect();
        let sections = std::iter::once(imports).chain(self.body.iter().cloned());
        vec![CodeFragment::block(
            format!("declare namespace {}", self.name),
            CodeFragment::separated(sections),
        )]
    }
}
