//! CodeFile abstraction for structured declaration file generation.
//!
//! A `.d.ts` file has a header comment, top-level import aliases and body
//! content, in that order.

use modelts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::ImportAlias;

/// A structured representation of a TypeScript declaration file.
///
/// Sections are separated by blank lines, and so are body elements.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header("// generated")
///     .add(NamespaceBlock::new("App.Models").add_all([post]))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<ImportAlias>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header line, written verbatim.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add top-level import aliases; duplicates are ignored.
    pub fn imports(mut self, imports: impl IntoIterator<Item = ImportAlias>) -> Self {
        for import in imports {
            if !self.imports.contains(&import) {
                self.imports.push(import);
            }
        }
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn render(&self) -> String {
        CodeBuilder::render(self)
    }
}

impl Renderable for CodeFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header: Vec<CodeFragment> = self.header.iter().map(CodeFragment::line).collect();
        let imports: Vec<CodeFragment> =
            self.imports.iter().flat_map(ImportAlias::to_fragments).collect();
        CodeFragment::separated([header, imports].into_iter().chain(self.body.iter().cloned()))
    }
}
