//! Check operation - declaration file freshness.

use std::path::Path;

use eyre::Result;
use modelts_codegen_typescript::Generator;
use modelts_ir::Snapshot;
use modelts_manifest::Config;

use super::warning_messages;
use crate::reports::{CheckReport, OutputStatus};

/// Execute the check operation.
///
/// Renders the declarations and compares them with the file at `output_path`.
pub fn check(snapshot: &Snapshot, config: &Config, output_path: &Path) -> Result<CheckReport> {
    let generator = Generator::run(snapshot, config)?;
    let file = generator.file(output_path);

    let status = if !file.exists() {
        OutputStatus::Missing
    } else if file.is_current() {
        OutputStatus::Current
    } else {
        OutputStatus::Stale
    };

    Ok(CheckReport {
        output_path: output_path.to_path_buf(),
        status,
        models: generator.interfaces().len(),
        warnings: warning_messages(generator.diagnostics()),
    })
}
