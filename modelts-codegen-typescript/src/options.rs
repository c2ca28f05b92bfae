use modelts_manifest::{Config, ReferenceStyle};

/// Banner written at the top of every generated document.
pub const BANNER: &[&str] = &[
    "// This file is generated by modelts. Do not edit it by hand.",
    "// Regenerate it with `modelts generate`.",
];

/// Options controlling how interface blocks become a declaration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap each namespace group in `declare namespace`.
    pub declare_namespace: bool,
    pub references: ReferenceStyle,
    /// Emit type comments as JSDoc above members.
    pub comments: bool,
    /// Emit the [`BANNER`].
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            declare_namespace: config.declare_namespace,
            references: config.references,
            comments: config.comments,
            header: config.header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_config() {
        let options = RenderOptions::default();
        assert!(options.declare_namespace);
        assert_eq!(options.references, ReferenceStyle::Qualified);
        assert!(!options.comments);
        assert!(options.header);
    }

    #[test]
    fn test_from_config() {
        let config: Config = r#"
            declare_namespace = false
            references = "alias"
            comments = true
            header = false
        "#
        .parse()
        .unwrap();
        let options = RenderOptions::from(&config);
        assert!(!options.declare_namespace);
        assert_eq!(options.references, ReferenceStyle::Alias);
        assert!(options.comments);
        assert!(!options.header);
    }
}
