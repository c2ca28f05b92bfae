//! Inspect phase - gathers columns and classified members per model.

use eyre::Result;
use tracing::debug;

use crate::{
    ModelInspector,
    pipeline::{CompilationContext, Phase},
};

/// Phase that inspects every discovered model.
///
/// The first model that cannot be inspected aborts the run.
pub struct InspectPhase;

impl Phase for InspectPhase {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn description(&self) -> &'static str {
        "Classify members and probe accessors and relations"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let mut inspections = Vec::with_capacity(ctx.models.len());

        for model in &ctx.models {
            let inspection = ModelInspector::new(ctx.source)
                .inspection_for(model.clone())
                .inspect()?;
            debug!(
                model = %model,
                columns = inspection.columns.len(),
                accessors = inspection.accessors.len(),
                relations = inspection.relations.len(),
                "inspected model"
            );
            inspections.push(inspection);
        }

        ctx.inspections = inspections;
        Ok(())
    }
}
