//! Indented text output for declaration fragments.

use super::{CodeFragment, Renderable};

/// One indentation level in generated declarations.
const INDENT: &str = "  ";

/// Writes fragments into a string, indenting block bodies by two spaces.
///
/// ```
/// use modelts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
///
/// struct User;
///
/// impl Renderable for User {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::block(
///             "export interface User",
///             vec![CodeFragment::line("id: number;")],
///         )]
///     }
/// }
///
/// assert_eq!(
///     CodeBuilder::render(&User),
///     "export interface User {\n  id: number;\n}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Render a node into declaration text.
    pub fn render(node: &impl Renderable) -> String {
        let mut builder = Self::default();
        for fragment in node.to_fragments() {
            builder.fragment(&fragment);
        }
        builder.buffer
    }

    fn fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.line(text),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::JsDoc(text) => self.line(&format!("/** {} */", escape_comment(text))),
            CodeFragment::Block { opener, body } if body.is_empty() => {
                self.line(&format!("{} {{}}", opener))
            }
            CodeFragment::Block { opener, body } => {
                self.line(&format!("{} {{", opener));
                self.depth += 1;
                for child in body {
                    self.fragment(child);
                }
                self.depth -= 1;
                self.line("}");
            }
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

/// `*/` inside comment text would close the comment early.
fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}
