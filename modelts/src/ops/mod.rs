//! Core operations.
//!
//! This module contains the business logic for modelts commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
use modelts_codegen::pipeline::Diagnostic;

/// Warning messages with their location on a second line.
fn warning_messages<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Vec<String> {
    diagnostics
        .into_iter()
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect()
}
