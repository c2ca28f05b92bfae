//! TypeScript declaration renderer for the modelts generator.
//!
//! This crate turns resolved interface blocks into a single `.d.ts` document:
//! one exported interface per model, grouped by namespace and optionally
//! wrapped in `declare namespace` blocks.
//!
//! # Usage
//!
//! ```ignore
//! use modelts_codegen_typescript::Generator;
//! use modelts_manifest::{Config, load_snapshot};
//!
//! let config = Config::default();
//! let snapshot = load_snapshot(&config.snapshot)?;
//! let generator = Generator::run(&snapshot, &config)?;
//!
//! // Preview without writing
//! let preview = generator.preview(&config.output_path);
//!
//! // Write to disk
//! let result = generator.generate(&config.output_path)?;
//! ```
//!
//! # Generated Output
//!
//! ```text
//! declare namespace App.Models {
//!   export interface Post {
//!     id: number;
//!     title: string | null;
//!     excerpt?: string;
//!     comments?: Comment[] | null;
//!   }
//! }
//! ```

mod code_file;
mod document;
mod generator;
mod options;
mod types;

pub mod ast;

pub use ast::{ImportAlias, Interface, InterfaceField, NamespaceBlock};
pub use code_file::CodeFile;
pub use document::{Document, render_interface};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use options::{BANNER, RenderOptions};
pub use types::{References, TypeRenderer};
