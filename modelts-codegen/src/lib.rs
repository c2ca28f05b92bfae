//! Model inspection and type resolution for the modelts declaration generator.
//!
//! This crate turns what the host framework knows about its models into
//! language-neutral interface blocks that renderers consume.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`framework`] - Framework class names and relation hierarchy
//! - [`pipeline`] - Phase pipeline from discovery to interface blocks
//! - [`testing`] - Snapshot fixtures (feature-gated)
//!
//! Classification, cardinality and type resolution are re-exported at the
//! crate root.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod classify;
mod error;
pub mod framework;
mod inspect;
pub mod pipeline;
mod relations;
mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use classify::{ClassifiedMember, classify};
pub use error::{InspectError, Result};
pub use inspect::{
    InspectedAccessor, InspectedRelation, InspectionResult, ModelInspector, ModelSource, TypeIndex,
};
pub use relations::{
    CardinalitySource, RelationCounter, ResolvedCardinality, known_cardinality, resolve_cardinality,
};
pub use resolve::{
    AccessorTypeResolver, Resolved, ResolvedModel, ResolverConfig, TypeResolver, counter_table,
};
