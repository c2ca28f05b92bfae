//! Fragments produced by declaration nodes.

/// A piece of a declaration file, positioned relative to its enclosing block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    Line(String),
    /// An empty line; never indented.
    Blank,
    /// `opener {`, the indented body, then `}`. An empty body collapses to
    /// `opener {}`.
    Block {
        opener: String,
        body: Vec<CodeFragment>,
    },
    /// A single-line `/** ... */` comment.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(opener: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            opener: opener.into(),
            body,
        }
    }

    pub fn jsdoc(text: impl Into<String>) -> Self {
        Self::JsDoc(text.into())
    }

    /// Join sections with one blank line between them. Empty sections are
    /// dropped, so no leading, trailing or doubled blank lines appear.
    pub fn separated(sections: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for section in sections.into_iter().filter(|s| !s.is_empty()) {
            if !fragments.is_empty() {
                fragments.push(Self::Blank);
            }
            fragments.extend(section);
        }
        fragments
    }
}

/// Declaration nodes that lower to fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_skips_empty_sections() {
        let fragments = CodeFragment::separated(vec![
            vec![],
            vec![CodeFragment::line("import User = App.Auth.User;")],
            vec![],
            vec![CodeFragment::line("export interface Post {}")],
        ]);
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("import User = App.Auth.User;"),
                CodeFragment::Blank,
                CodeFragment::line("export interface Post {}"),
            ]
        );
    }

    #[test]
    fn test_separated_all_empty() {
        assert!(CodeFragment::separated(vec![vec![], vec![]]).is_empty());
    }
}
