//! Compilation context passed through pipeline phases.

use std::path::{Path, PathBuf};

use modelts_ir::{ClassName, InterfaceBlock};
use modelts_manifest::Config;

use super::diagnostic::Diagnostic;
use crate::{InspectionResult, ModelSource, ResolverConfig};

/// Inputs of one generation run.
#[derive(Debug)]
pub struct GenerateOptions {
    /// Directories models are discovered under.
    pub source_dirs: Vec<PathBuf>,
    pub resolver: ResolverConfig,
}

impl GenerateOptions {
    pub fn source_dirs(&self) -> Vec<&Path> {
        self.source_dirs.iter().map(PathBuf::as_path).collect()
    }
}

impl From<&Config> for GenerateOptions {
    fn from(config: &Config) -> Self {
        Self {
            source_dirs: config
                .source_dir
                .paths()
                .into_iter()
                .map(Path::to_path_buf)
                .collect(),
            resolver: ResolverConfig::from(config),
        }
    }
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of a run through each phase,
/// accumulating results and diagnostics along the way.
pub struct CompilationContext<'a> {
    /// Where models, columns and members come from.
    pub source: &'a dyn ModelSource,
    pub options: GenerateOptions,
    /// Discovered models in discovery order (populated by DiscoverPhase).
    pub models: Vec<ClassName>,
    /// One inspection per model (populated by InspectPhase).
    pub inspections: Vec<InspectionResult>,
    /// One interface per model (populated by ResolvePhase).
    pub interfaces: Vec<InterfaceBlock>,
    /// Warnings collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CompilationContext<'a> {
    /// Create a new compilation context over a model source.
    pub fn new(source: &'a dyn ModelSource, options: GenerateOptions) -> Self {
        Self {
            source,
            options,
            models: Vec::new(),
            inspections: Vec::new(),
            interfaces: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a warning from a phase.
    pub fn add_warning(&mut self, phase: &'static str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Take the interfaces out of the context, consuming them.
    pub fn take_interfaces(&mut self) -> Vec<InterfaceBlock> {
        std::mem::take(&mut self.interfaces)
    }
}

#[cfg(test)]
mod tests {
    use modelts_ir::Snapshot;

    use super::*;

    #[test]
    fn test_context_creation() {
        let snapshot = Snapshot::default();
        let ctx = CompilationContext::new(&snapshot, GenerateOptions::from(&Config::default()));

        assert!(ctx.models.is_empty());
        assert!(ctx.interfaces.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.options.source_dirs(), vec![Path::new("app/Models")]);
    }

    #[test]
    fn test_add_warning() {
        let snapshot = Snapshot::default();
        let mut ctx = CompilationContext::new(&snapshot, GenerateOptions::from(&Config::default()));

        ctx.add_warning("resolve", "test warning");

        assert_eq!(ctx.diagnostics, vec![Diagnostic::warning("resolve", "test warning")]);
    }
}
