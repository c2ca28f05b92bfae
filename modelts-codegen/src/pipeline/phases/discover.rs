//! Discover phase - lists the models to generate.

use eyre::Result;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that lists the models declared under the configured source directories.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "List models under the source directories"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let dirs = ctx.options.source_dirs();
        let models = ctx.source.list_models(&dirs);
        debug!(count = models.len(), "discovered models");

        if models.is_empty() {
            let dirs = dirs
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            ctx.add_warning(self.name(), format!("no models found under {}", dirs));
        }

        ctx.models = models;
        Ok(())
    }
}
