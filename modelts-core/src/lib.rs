//! Core utilities and types for the modelts declaration generator.
//!
//! This crate holds the static type catalog that maps host-language and
//! database type names to target types, plus the string and file helpers
//! shared across the workspace.

mod catalog;
mod file;
mod utils;

// Type catalog
pub use catalog::{
    cast_keyword, resolve_cast_keyword, resolve_column_type, resolve_enum, resolve_primitive,
};
// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{is_identifier, property_key, to_snake_case};
