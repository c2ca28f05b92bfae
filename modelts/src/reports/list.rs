//! List command report data structures.

use super::output::{Output, Report};

/// Member counts of one discovered model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub class: String,
    pub columns: usize,
    pub accessors: usize,
    pub relations: usize,
}

/// Report data from model discovery.
#[derive(Debug)]
pub struct ListReport {
    /// Directories that were searched.
    pub source_dirs: Vec<String>,
    /// Models in discovery order.
    pub models: Vec<ModelSummary>,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.models.is_empty() {
            out.preformatted(&format!("No models found in {}", self.source_dirs.join(", ")));
            return;
        }

        out.section(&format!("Models ({})", self.models.len()));
        for model in &self.models {
            out.list_item(&format!(
                "{} ({} columns, {} accessors, {} relations)",
                model.class, model.columns, model.accessors, model.relations
            ));
        }
    }
}
