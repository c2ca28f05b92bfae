//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Config, SourceDirs, validate::find_key_span};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "modelts.toml")
    }
}

impl Config {
    /// Parse a modelts.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a modelts.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate the configuration after parsing.
fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let span = |key: &str| find_key_span(ctx.src(), key);

    if config.snapshot.as_os_str().is_empty() {
        return Err(ctx.validation_error_at("snapshot must not be empty", span("snapshot")));
    }

    match &config.source_dir {
        SourceDirs::Many(paths) if paths.is_empty() => {
            return Err(ctx.validation_error_at(
                "source_dir must name at least one directory",
                span("source_dir"),
            ));
        }
        dirs if dirs.paths().iter().any(|p| p.as_os_str().is_empty()) => {
            return Err(ctx.validation_error_at(
                "source_dir entries must not be empty",
                span("source_dir"),
            ));
        }
        _ => {}
    }

    if config.output_path.as_os_str().is_empty() {
        return Err(ctx.validation_error_at("output_path must not be empty", span("output_path")));
    }

    if config.custom_attributes.fallback_return_type.trim().is_empty() {
        return Err(ctx.validation_error_at(
            "fallback_return_type must not be empty",
            span("fallback_return_type"),
        ));
    }

    for (class, resolver) in &config.custom_attributes.accessor_resolvers {
        if resolver.type_name().trim().is_empty() {
            return Err(ctx.validation_error_at(
                format!("accessor resolver for '{}' has an empty type", class),
                span(class),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_span(content: &str) -> Option<miette::SourceSpan> {
        match *parse_config(content, "modelts.toml").unwrap_err() {
            Error::Validation { span, .. } => span,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = r#"
            snapshot = "build/snapshot.json"
            source_dir = ["app/Models"]
            output_path = "types/models.d.ts"
            declare_namespace = false

            [custom_attributes]
            fallback_return_type = "any"
        "#
        .parse()
        .unwrap();

        assert!(!config.declare_namespace);
        assert_eq!(config.custom_attributes.fallback_return_type, "any");
    }

    #[test]
    fn test_empty_output_path_points_at_key() {
        let content = "output_path = \"\"\n";
        let span = validation_span(content).unwrap();
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), "output_path".len());
    }

    #[test]
    fn test_empty_fallback_return_type() {
        let content = "[custom_attributes]\nfallback_return_type = \"  \"\n";
        let span = validation_span(content).unwrap();
        assert_eq!(span.offset(), "[custom_attributes]\n".len());
    }

    #[test]
    fn test_empty_source_dir_array() {
        assert!(validation_span("source_dir = []\n").is_some());
    }

    #[test]
    fn test_empty_accessor_resolver_type() {
        let content = "[custom_attributes.accessor_resolvers]\n\"Money\\\\Money\" = \"\"\n";
        assert!(validation_span(content).is_some());
    }

    #[test]
    fn test_parse_error_has_span() {
        match *parse_config("declare_namespace = maybe", "modelts.toml").unwrap_err() {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
