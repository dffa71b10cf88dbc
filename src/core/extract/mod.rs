//! Extraction: environment variable names referenced by one Python source.
//!
//! A file is parsed, the names bound to the environment module are resolved
//! according to the [`BindingMode`], and an [`EnvVarVisitor`] walks the tree
//! collecting every literal key it recognizes.

pub mod bindings;
pub mod literal;
pub mod visitor;


use std::collections::HashSet;

use clap::ValueEnum;

use crate::core::parsers::python::{ParseError, ParsedPython, parse_python_source};

pub use bindings::EnvBindings;
pub use visitor::EnvVarVisitor;

/// Distinct environment variable names, unordered until emission.
pub type FoundSet = HashSet<String>;

/// How the environment module and its `environ` alias are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum BindingMode {
    /// Match the conventional spellings `os` and `environ` wherever they appear.
    #[default]
    Names,
    /// Only match names bound by `import os` / `from os import environ` in the file.
    Imports,
}

/// Extract literal environment variable names from Python source text.
///
/// Fails only if the text is not valid Python; no match is an empty set.
///
/// # Examples
///
/// ```
/// use sample_env::core::extract::extract;
///
/// let found = extract("import os\nurl = os.environ.get('DATABASE_URL', 'sqlite://')\n").unwrap();
/// assert!(found.contains("DATABASE_URL"));
/// ```
pub fn extract(source: &str) -> Result<FoundSet, ParseError> {
    extract_with(source, BindingMode::Names)
}

/// Like [`extract`], choosing how the module and alias names are resolved.
pub fn extract_with(source: &str, mode: BindingMode) -> Result<FoundSet, ParseError> {
    let parsed = parse_python_source(source)?;
    Ok(extract_parsed(&parsed, mode))
}

/// Run the idiom catalog over an already parsed file.
pub fn extract_parsed(parsed: &ParsedPython, mode: BindingMode) -> FoundSet {
    let bindings = EnvBindings::for_mode(mode, parsed.root(), parsed.bytes());
    let mut visitor = EnvVarVisitor::new(parsed.bytes(), &bindings);
    visitor.visit_tree(parsed.root());
    visitor.found
}
