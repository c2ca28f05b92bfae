//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// State of the declaration file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// The file holds exactly the rendered declarations.
    Current,
    /// The file differs from the rendered declarations.
    Stale,
    /// No file exists at the output path.
    Missing,
}

/// Report data from the freshness check.
#[derive(Debug)]
pub struct CheckReport {
    /// Declaration file that was compared.
    pub output_path: PathBuf,
    pub status: OutputStatus,
    /// Number of models rendered.
    pub models: usize,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn is_current(&self) -> bool {
        self.status == OutputStatus::Current
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        let path = self.output_path.display();
        match self.status {
            OutputStatus::Current => out.preformatted(&format!(
                "✓ {} is up to date ({} models)",
                path, self.models
            )),
            OutputStatus::Stale => {
                out.preformatted(&format!("✗ {} is out of date", path));
                out.preformatted("  run `modelts generate` to update it");
            }
            OutputStatus::Missing => {
                out.preformatted(&format!("✗ {} does not exist", path));
                out.preformatted("  run `modelts generate` to create it");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::tests::RecordingOutput;

    #[test]
    fn test_render_stale() {
        let report = CheckReport {
            output_path: PathBuf::from("resources/js/types/models.d.ts"),
            status: OutputStatus::Stale,
            models: 4,
            warnings: Vec::new(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_current());
        assert_eq!(out.lines[0], "✗ resources/js/types/models.d.ts is out of date");
    }
}
