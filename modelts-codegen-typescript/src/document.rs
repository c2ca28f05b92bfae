//! Declaration document assembly.

use indexmap::IndexMap;
use modelts_ir::InterfaceBlock;

use crate::{
    CodeFile, RenderOptions,
    ast::{Interface, NamespaceBlock},
    options::BANNER,
    types::{References, TypeRenderer},
};

/// Render one interface block as an exported interface.
pub fn render_interface(block: &InterfaceBlock, references: &References, comments: bool) -> Interface {
    let renderer = TypeRenderer::new(&block.model, references).with_comments(comments);
    block
        .members
        .iter()
        .fold(Interface::new(block.name()), |interface, member| {
            interface.field_with(renderer.field(member))
        })
}

/// A full declaration document built from resolved interface blocks.
///
/// Blocks are grouped by namespace. Groups appear in the order their first
/// model was discovered, and blocks keep discovery order within a group.
pub struct Document<'a> {
    interfaces: &'a [InterfaceBlock],
    options: RenderOptions,
}

impl<'a> Document<'a> {
    pub fn new(interfaces: &'a [InterfaceBlock], options: RenderOptions) -> Self {
        Self {
            interfaces,
            options,
        }
    }

    /// Blocks grouped by host namespace (empty for the global namespace).
    pub fn groups(&self) -> IndexMap<&'a str, Vec<&'a InterfaceBlock>> {
        let mut groups: IndexMap<&str, Vec<&InterfaceBlock>> = IndexMap::new();
        for block in self.interfaces {
            groups.entry(block.model.namespace()).or_default().push(block);
        }
        groups
    }

    /// Render the document as declaration file text.
    pub fn render(&self) -> String {
        let mut file = CodeFile::new();
        if self.options.header {
            for line in BANNER {
                file = file.header(*line);
            }
        }

        let groups = self.groups();
        if self.options.declare_namespace {
            for (namespace, blocks) in &groups {
                file = self.namespace_group(file, namespace, blocks);
            }
        } else {
            let blocks: Vec<&InterfaceBlock> = groups.values().flatten().copied().collect();
            let references = References::for_scope(self.options.references, blocks.iter().copied());
            file = file.imports(references.imports()).add_all(
                blocks
                    .iter()
                    .map(|block| render_interface(block, &references, self.options.comments)),
            );
        }

        file.render()
    }

    /// Add one namespace group to the file, wrapped in `declare namespace`
    /// unless it is the global namespace.
    fn namespace_group(&self, file: CodeFile, namespace: &str, blocks: &[&InterfaceBlock]) -> CodeFile {
        let references = References::for_scope(self.options.references, blocks.iter().copied());
        let interfaces = blocks
            .iter()
            .map(|block| render_interface(block, &references, self.options.comments));

        if namespace.is_empty() {
            return file.imports(references.imports()).add_all(interfaces);
        }

        let dotted = blocks
            .first()
            .map(|block| block.namespace())
            .unwrap_or_default();
        file.add(
            NamespaceBlock::new(dotted)
                .imports(references.imports())
                .add_all(interfaces),
        )
    }
}
