//! Generate operation - declaration file generation.

use std::path::Path;

use eyre::{Context, Result};
use modelts_codegen_typescript::Generator;
use modelts_ir::Snapshot;
use modelts_manifest::Config;

use super::warning_messages;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Declaration file to write.
    pub output_path: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline over the snapshot and renders the declaration file.
pub fn generate(snapshot: &Snapshot, config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::run(snapshot, config)?;

    let result = if opts.dry_run {
        let preview = generator.preview(opts.output_path);
        GenerationResult::Preview(PreviewFile {
            path: preview.path,
            content: preview.content,
        })
    } else {
        let written = generator
            .generate(opts.output_path)
            .wrap_err("Failed to write declarations")?;
        GenerationResult::Written(WrittenResult {
            path: written.path,
            result: written.result,
        })
    };

    Ok(GenerateReport {
        warnings: warning_messages(generator.diagnostics()),
        models: generator.interfaces().len(),
        namespaces: generator.namespace_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use modelts_codegen::testing::{ModelBuilder, SnapshotBuilder};
    use modelts_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn snapshot() -> Snapshot {
        SnapshotBuilder::new()
            .model(ModelBuilder::new("App\\Models\\Post").column("id", "integer", false))
            .model(ModelBuilder::new("App\\Models\\Tag"))
            .build()
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.d.ts");
        let report = generate(
            &snapshot(),
            &Config::default(),
            GenerateOptions {
                output_path: &path,
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!path.exists());
        assert_eq!(report.models, 2);
        assert_eq!(report.namespaces, 1);
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert!(preview.content.contains("export interface Post {"));
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resources/js/types/models.d.ts");
        let opts = || GenerateOptions {
            output_path: &path,
            dry_run: false,
        };

        let report = generate(&snapshot(), &Config::default(), opts()).unwrap();
        assert!(matches!(
            report.result,
            GenerationResult::Written(WrittenResult { result: WriteResult::Written, .. })
        ));

        let report = generate(&snapshot(), &Config::default(), opts()).unwrap();
        assert!(matches!(
            report.result,
            GenerationResult::Written(WrittenResult { result: WriteResult::Unchanged, .. })
        ));
    }
}
