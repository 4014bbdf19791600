//! `seqblock_core` extracts sequential shell blocks from a markdown document
//! and works out which variables each block inherits from the blocks before
//! it.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Extractor (finds ```bash <!-- SEQUENTIAL_CODEBLOCK --> fences)
//!   → Section parser (Preset Variables, Variables, Script, Dry-Run Script)
//!   → Variable table (registers the block's definitions, expanded)
//!   → Resolver (lists inherited variables in definition-safe order)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `seqblock.toml`.
//!
//! ## Key Types
//!
//! - [`SectionSet`] — The labelled sections of one block.
//! - [`VariableTable`] — Every variable defined so far in a document pass.
//! - [`DocumentPass`] — The state object that carries the table from block to
//!   block.
//! - [`Report`] — All processed blocks of a document.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqblock_core::PassOptions;
//! use seqblock_core::process_document;
//!
//! let document = "```bash <!-- SEQUENTIAL_CODEBLOCK -->\n## Variables\nFOO=bar\n```\n\n```bash \
//!                 <!-- SEQUENTIAL_CODEBLOCK -->\n## Script\necho $FOO\n```\n";
//! let report = process_document(document, PassOptions::default());
//!
//! assert_eq!(report.total_blocks(), 2);
//! assert_eq!(report.blocks[1].dependencies[0].name, "FOO");
//! assert_eq!(report.blocks[1].dependencies[0].value, "bar");
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use expander::*;
pub use extractor::*;
pub use resolver::*;
pub use scanner::*;
pub use sections::*;
pub use table::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod expander;
mod extractor;
mod resolver;
mod scanner;
mod sections;
mod table;
