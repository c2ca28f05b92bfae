//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of the generation pipeline.
///
/// Each phase reads what earlier phases left in the context and fills in its
/// own part: discovered models, inspections, then interface blocks.
pub trait Phase {
    /// Short name, used to tag warnings and log lines.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run the phase. An error aborts the whole run; anything recoverable is
    /// recorded as a warning on the context instead.
    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()>;
}
