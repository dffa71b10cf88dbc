//! Source file parsers.
//!
//! - `python`: Python source parser (uses tree-sitter for syntax tree generation)

pub mod python;
