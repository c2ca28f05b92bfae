//! Resolve phase - turns inspections into interface blocks.

use eyre::Result;
use tracing::debug;

use crate::{
    TypeResolver,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that resolves every inspected member to its target type.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve member types into interface blocks"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let resolver = TypeResolver::new(ctx.source, &ctx.options.resolver);
        let mut interfaces = Vec::with_capacity(ctx.inspections.len());
        let mut diagnostics = Vec::new();

        for inspection in &ctx.inspections {
            let resolved = resolver.resolve_model(inspection)?;
            debug!(
                model = %inspection.model,
                members = resolved.interface.members.len(),
                "resolved interface"
            );
            diagnostics.extend(resolved.warnings.into_iter().map(|warning| {
                Diagnostic::warning(self.name(), warning).at(inspection.model.as_str())
            }));
            interfaces.push(resolved.interface);
        }

        ctx.diagnostics.extend(diagnostics);
        ctx.interfaces = interfaces;
        Ok(())
    }
}
