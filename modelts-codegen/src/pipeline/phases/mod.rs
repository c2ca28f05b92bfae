//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`DiscoverPhase`] - lists the models under the source directories
//! - [`InspectPhase`] - classifies and probes each model's members
//! - [`ResolvePhase`] - resolves member types into interface blocks

mod discover;
mod inspect;
mod resolve;

pub use discover::DiscoverPhase;
pub use inspect::InspectPhase;
pub use resolve::ResolvePhase;
