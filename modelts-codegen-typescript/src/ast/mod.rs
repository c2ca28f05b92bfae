//! TypeScript AST builders for declaration files.
//!
//! These provide a high-level API for constructing ambient TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod imports;
mod interface;
mod namespace;

pub use imports::ImportAlias;
pub use interface::{Interface, InterfaceField};
pub use namespace::NamespaceBlock;
