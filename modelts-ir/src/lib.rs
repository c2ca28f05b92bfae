//! Intermediate representation types for the modelts declaration generator.
//!
//! This crate provides the type definitions shared by every stage of the
//! generation pipeline: the descriptors exported by the host framework's
//! reflection step, and the resolved declarations the renderer consumes.
//!
//! # Architecture
//!
//! ```text
//! snapshot.json → modelts-manifest (loading) → modelts-ir (descriptors)
//!               → modelts-codegen (classify, resolve) → InterfaceBlock → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Target-language agnostic (no TypeScript syntax lives here)
//! - Host-framework agnostic beyond class names and type shapes
//! - Self-contained (no dependencies beyond serde and indexmap)

mod class;
mod definition;
mod snapshot;
mod types;

pub use class::ClassName;
pub use definition::{InterfaceBlock, MemberDefinition, MemberKind};
pub use snapshot::{
    AccessorProbe, ClassEntry, ColumnDescriptor, EnumCase, EnumDefinition, MemberDescriptor,
    MethodEntry, ModelEntry, NamedType, RelationTarget, Snapshot, TypeShape,
};
pub use types::{Cardinality, Literal, TypeDescriptor, TypeName};
