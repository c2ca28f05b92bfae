//! TypeScript declaration generator.

use std::path::{Path, PathBuf};

use eyre::Result;
use modelts_codegen::{
    ModelSource,
    pipeline::{CompilationContext, Diagnostic, GenerateOptions, Pipeline},
};
use modelts_core::{File, WriteResult};
use modelts_ir::InterfaceBlock;
use modelts_manifest::Config;
use tracing::{debug, info};

use crate::{Document, RenderOptions};

/// A rendered file that has not been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of writing the declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Renders resolved interface blocks into one `.d.ts` document.
///
/// # Example
///
/// ```ignore
/// let generator = Generator::run(&snapshot, &config)?;
/// let result = generator.generate(&config.output_path)?;
/// ```
pub struct Generator {
    interfaces: Vec<InterfaceBlock>,
    diagnostics: Vec<Diagnostic>,
    options: RenderOptions,
}

impl Generator {
    /// Create a generator from a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext<'_>, options: RenderOptions) -> Self {
        Self {
            interfaces: ctx.take_interfaces(),
            diagnostics: std::mem::take(&mut ctx.diagnostics),
            options,
        }
    }

    /// Discover, inspect and resolve every model, ready to render.
    ///
    /// Any fatal inspection error aborts the whole run.
    pub fn run(source: &dyn ModelSource, config: &Config) -> Result<Self> {
        let ctx = Pipeline::new().run(source, GenerateOptions::from(config))?;
        Ok(Self::from_context(ctx, RenderOptions::from(config)))
    }

    pub fn interfaces(&self) -> &[InterfaceBlock] {
        &self.interfaces
    }

    /// Warnings raised while resolving the models.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of distinct namespaces among the interfaces.
    pub fn namespace_count(&self) -> usize {
        Document::new(&self.interfaces, self.options).groups().len()
    }

    /// Render the declaration document.
    pub fn render(&self) -> String {
        Document::new(&self.interfaces, self.options).render()
    }

    /// The declaration file at `path`, without touching the disk.
    pub fn file(&self, path: &Path) -> File {
        File::new(path, self.render())
    }

    /// Preview the generated file without writing to disk.
    pub fn preview(&self, path: &Path) -> PreviewFile {
        PreviewFile {
            path: path.to_path_buf(),
            content: self.render(),
        }
    }

    /// Write the declaration file, creating parent directories as needed.
    pub fn generate(&self, path: &Path) -> Result<GenerateResult> {
        let result = self.file(path).write()?;
        match result {
            WriteResult::Unchanged => debug!(path = %path.display(), "declarations unchanged"),
            _ => info!(
                path = %path.display(),
                interfaces = self.interfaces.len(),
                "wrote declarations"
            ),
        }
        Ok(GenerateResult {
            path: path.to_path_buf(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use modelts_codegen::testing::{ModelBuilder, SnapshotBuilder};
    use tempfile::TempDir;

    use super::*;

    fn generator() -> Generator {
        let snapshot = SnapshotBuilder::new()
            .model(ModelBuilder::new("App\\Models\\Post").column("id", "integer", false))
            .model(ModelBuilder::new("App\\Billing\\Invoice").column("total", "decimal", true))
            .build();
        Generator::run(&snapshot, &Config::default()).unwrap()
    }

    #[test]
    fn test_run_collects_interfaces() {
        let generator = generator();
        let names: Vec<_> = generator.interfaces().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Post"]);
        assert_eq!(generator.namespace_count(), 1);
    }

    #[test]
    fn test_preview_matches_render() {
        let generator = generator();
        let preview = generator.preview(Path::new("types/models.d.ts"));
        assert_eq!(preview.path, PathBuf::from("types/models.d.ts"));
        assert_eq!(preview.content, generator.render());
    }

    #[test]
    fn test_generate_writes_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resources/js/types/models.d.ts");
        let generator = generator();

        assert!(!generator.file(&path).is_current());
        assert_eq!(generator.generate(&path).unwrap().result, WriteResult::Written);
        assert!(generator.file(&path).is_current());
        assert_eq!(generator.generate(&path).unwrap().result, WriteResult::Unchanged);
    }

    #[test]
    fn test_empty_discovery_warns() {
        let snapshot = SnapshotBuilder::new().build();
        let generator = Generator::run(&snapshot, &Config::default()).unwrap();
        assert!(generator.interfaces().is_empty());
        assert_eq!(generator.diagnostics().len(), 1);
    }
}
