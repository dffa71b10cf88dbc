//! Core scanning engine.
//!
//! ## Pipeline
//!
//! 1. **Collection** (`collect`): walk the project root, apply ignore rules,
//!    and drive extraction file by file, unioning the results.
//! 2. **Extraction** (`extract`): parse one file and match the idiom catalog
//!    against every node of its syntax tree.
//! 3. **Emission** (`emit`): write the sorted `NAME=` template.
//!
//! ## Module Structure
//!
//! - `collect`: directory traversal, ignore rules, per-file failure policy
//! - `emit`: template rendering and writing
//! - `extract`: idiom catalog, import bindings, literal evaluation
//! - `parsers`: Python source parser (tree-sitter)

pub mod collect;
pub mod emit;
pub mod extract;
pub mod parsers;

pub use collect::{CollectResult, IgnoreRules, ParseErrorPolicy, collect};
pub use emit::{emit, render};
pub use extract::{BindingMode, FoundSet, extract, extract_with};
pub use parsers::python::ParseError;
