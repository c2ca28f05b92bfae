//! List operation - discovered models.

use eyre::Result;
use modelts_codegen::pipeline::{GenerateOptions, Pipeline};
use modelts_ir::Snapshot;
use modelts_manifest::Config;

use super::warning_messages;
use crate::reports::{ListReport, ModelSummary};

/// Execute the list operation.
///
/// Inspects every discovered model and summarizes its members.
pub fn list(snapshot: &Snapshot, config: &Config) -> Result<ListReport> {
    let ctx = Pipeline::new().run(snapshot, GenerateOptions::from(config))?;

    let models = ctx
        .inspections
        .iter()
        .map(|inspection| ModelSummary {
            class: inspection.model.to_string(),
            columns: inspection.columns.len(),
            accessors: inspection.accessors.len(),
            relations: inspection.relations.len(),
        })
        .collect();

    Ok(ListReport {
        source_dirs: config
            .source_dir
            .paths()
            .iter()
            .map(|dir| dir.display().to_string())
            .collect(),
        models,
        warnings: warning_messages(&ctx.diagnostics),
    })
}
