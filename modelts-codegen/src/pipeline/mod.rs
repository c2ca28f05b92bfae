//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from model discovery to resolved interface blocks. The pipeline provides:
//!
//! - Explicit phase boundaries (discover → inspect → resolve)
//! - Warnings collected across phases
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use modelts_codegen::pipeline::{GenerateOptions, Pipeline};
//!
//! let mut ctx = Pipeline::new().run(&snapshot, GenerateOptions::from(&config))?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{diag}");
//! }
//!
//! let interfaces = ctx.take_interfaces();
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, GenerateOptions};
pub use diagnostic::Diagnostic;
pub use phase::Phase;
pub use runner::Pipeline;
