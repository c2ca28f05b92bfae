//! Pipeline orchestrator.

use eyre::Result;
use tracing::{debug, info};

use super::{
    CompilationContext, GenerateOptions, Phase,
    phases::{DiscoverPhase, InspectPhase, ResolvePhase},
};
use crate::ModelSource;

/// Runs discover, inspect and resolve in order over a model source.
///
/// The first failing phase aborts the run, so a run either yields every
/// interface or none.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(DiscoverPhase),
                Box::new(InspectPhase),
                Box::new(ResolvePhase),
            ],
        }
    }

    /// Run every phase against a model source.
    pub fn run<'a>(
        &self,
        source: &'a dyn ModelSource,
        options: GenerateOptions,
    ) -> Result<CompilationContext<'a>> {
        let mut ctx = CompilationContext::new(source, options);

        for phase in &self.phases {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        info!(
            models = ctx.interfaces.len(),
            warnings = ctx.diagnostics.len(),
            "pipeline finished"
        );
        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use modelts_ir::Snapshot;
    use modelts_manifest::Config;

    use super::*;
    use crate::{
        InspectError, framework,
        testing::{ModelBuilder, SnapshotBuilder},
    };

    fn blog() -> Snapshot {
        SnapshotBuilder::new()
            .model(
                ModelBuilder::new("App\\Models\\Post")
                    .column("id", "integer", false)
                    .relation("comments", framework::HAS_MANY, "App\\Models\\Comment"),
            )
            .model(ModelBuilder::new("App\\Models\\Comment").column("id", "integer", false))
            .build()
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let snapshot = blog();
        let ctx = Pipeline::new()
            .run(&snapshot, GenerateOptions::from(&Config::default()))
            .expect("pipeline should succeed");

        assert_eq!(ctx.models.len(), 2);
        assert_eq!(ctx.inspections.len(), 2);
        assert_eq!(ctx.interfaces.len(), 2);
        assert_eq!(ctx.interfaces[0].name(), "Post");
    }

    #[test]
    fn test_pipeline_aborts_on_unresolved_relation() {
        let mut snapshot = blog();
        for entry in snapshot.classes.values_mut() {
            if let Some(model) = entry.model.as_mut() {
                for method in &mut model.methods {
                    method.relation = None;
                }
            }
        }

        let err = Pipeline::new()
            .run(&snapshot, GenerateOptions::from(&Config::default()))
            .err()
            .expect("pipeline should fail");
        assert!(matches!(
            err.downcast_ref::<InspectError>(),
            Some(InspectError::Reflection { .. })
        ));
    }
}
