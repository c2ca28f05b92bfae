//! Declaration text building blocks.
//!
//! Nodes lower themselves to [`CodeFragment`]s through [`Renderable`], and
//! [`CodeBuilder`] writes the fragments out with two-space indentation.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
