//! Generate command report data structures.

use std::path::PathBuf;

use modelts_core::WriteResult;

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,

    /// Number of interfaces rendered.
    pub models: usize,

    /// Number of namespace groups rendered.
    pub namespaces: usize,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of declaration generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written (or already current).
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

/// Result when the file was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// The file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn summary(&self) -> String {
        format!(
            "{} {} in {} {}",
            self.models,
            plural(self.models, "interface", "interfaces"),
            self.namespaces,
            plural(self.namespaces, "namespace", "namespaces")
        )
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let status = match written.result {
            WriteResult::Written => "Generated",
            WriteResult::Unchanged | WriteResult::Skipped => "Unchanged",
        };
        out.key_value(status, &written.path.display().to_string());
        out.preformatted(&format!("  {}", self.summary()));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewFile) {
        out.divider(&preview.path.display().to_string());
        out.preformatted(&preview.content);
        out.divider("Summary");
        out.preformatted(&self.summary());
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
