//! TypeScript interface builder.

use modelts_codegen::builder::{CodeFragment, Renderable};
use modelts_core::property_key;

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    /// Rendered as a JSDoc line above the field.
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn push_fragments(&self, fragments: &mut Vec<CodeFragment>) {
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }
        let marker = if self.optional { "?" } else { "" };
        fragments.push(CodeFragment::line(format!(
            "{}{}: {};",
            property_key(&self.name),
            marker,
            self.ty
        )));
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            field.push_fragments(&mut body);
        }
        vec![CodeFragment::block(
            format!("export interface {}", self.name),
            body,
        )]
    }
}

#[cfg(test)]
mod tests {
    use modelts_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_empty_interface() {
        let code = CodeBuilder::render(&Interface::new("Empty"));
        assert_eq!(code, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let interface = Interface::new("Post")
            .field_with(InterfaceField::new("id", "number"))
            .field_with(InterfaceField::new("excerpt", "string").optional());
        assert_eq!(
            CodeBuilder::render(&interface),
            "export interface Post {\n  id: number;\n  excerpt?: string;\n}\n"
        );
    }

    #[test]
    fn test_field_doc_renders_jsdoc() {
        let interface = Interface::new("Post")
            .field_with(InterfaceField::new("published_at", "string").doc("datetime string"));
        assert!(CodeBuilder::render(&interface)
            .contains("  /** datetime string */\n  published_at: string;\n"));
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let interface = Interface::new("User")
            .field_with(InterfaceField::new("2fa_secret", "string"))
            .field_with(InterfaceField::new("full-name", "string").optional());
        let code = CodeBuilder::render(&interface);
        assert!(code.contains("\"2fa_secret\": string;"));
        assert!(code.contains("\"full-name\"?: string;"));
    }
}
