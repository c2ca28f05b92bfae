//! TypeScript import alias builder.

use modelts_codegen::builder::{CodeFragment, Renderable};

/// Namespace import alias, e.g. `import Role = App.Auth.Role;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias {
    alias: String,
    target: String,
}

impl ImportAlias {
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }
}

impl Renderable for ImportAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {} = {};",
            self.alias, self.target
        ))]
    }
}

#[cfg(test)]
mod tests {
    use modelts_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_import_alias() {
        let code = CodeBuilder::render(&ImportAlias::new("Role", "App.Auth.Role"));
        assert_eq!(code, "import Role = App.Auth.Role;\n");
    }
}
