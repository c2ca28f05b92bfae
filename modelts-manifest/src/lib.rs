//! Configuration and snapshot loading for the modelts declaration generator.
//!
//! - [`Config`] - the parsed `modelts.toml`, with defaults for every key
//! - [`ModeltsToml`] - a config file on disk with its raw content
//! - [`load_snapshot`] - the model snapshot exported by the host application
//!
//! Errors are [`miette`] diagnostics carrying the offending source span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod snapshot;

pub use config::{
    AccessorResolver, CONFIG_TEMPLATE, CollisionPolicy, Config, CustomAttributes, ReferenceStyle,
    RelationNaming, SourceDirs, find_key_span, parse_config,
};
pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE, ModeltsToml};
pub use snapshot::{load_snapshot, parse_snapshot};
