//! Collection: scan a project tree and union the names found in every file.
//!
//! - `ignore_rules`: reduced ignore-file rules (directory and file patterns)
//! - `file_scanner`: directory walk selecting candidate source files
//!
//! Files are processed one at a time; each is read, parsed, scanned and
//! dropped before the next one is opened.

pub mod file_scanner;
pub mod ignore_rules;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;

pub use file_scanner::{ScanResult, scan_files};
pub use ignore_rules::IgnoreRules;

use crate::{
    config::Config,
    core::{
        extract::{FoundSet, extract_parsed},
        parsers::python::parse_python_source,
    },
    issues::ParseErrorIssue,
};

/// What happens when a candidate file is not valid Python.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ParseErrorPolicy {
    /// Stop the whole run at the first file that fails to parse.
    #[default]
    Abort,
    /// Leave the file out, record it, and keep going.
    Skip,
}

/// Outcome of scanning a project tree.
#[derive(Debug, Default)]
pub struct CollectResult {
    /// Union of the names found in every scanned file.
    pub found: FoundSet,
    /// Files left out under [`ParseErrorPolicy::Skip`].
    pub parse_errors: Vec<ParseErrorIssue>,
    /// Number of source files that were parsed successfully.
    pub files_scanned: usize,
    /// Directory entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Scan `config.root` and collect the environment variable names of all
/// candidate source files.
///
/// # Errors
///
/// Returns error if:
/// - The root does not exist or is not a directory
/// - The ignore file exists but cannot be read
/// - A candidate file cannot be read
/// - A candidate file fails to parse and the policy is [`ParseErrorPolicy::Abort`]
pub fn collect(config: &Config) -> Result<CollectResult> {
    config.validate()?;
    let root = config.root.as_path();

    let rules = IgnoreRules::load(&config.ignore_file_path(), config.verbose)?;
    let scan = scan_files(root, &rules, config.verbose);

    let mut result = CollectResult {
        skipped_count: scan.skipped_count,
        ..CollectResult::default()
    };

    for path in &scan.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let parsed = match parse_python_source(source) {
            Ok(parsed) => parsed,
            Err(e) => match config.on_parse_error {
                ParseErrorPolicy::Abort => {
                    return Err(e).with_context(|| format!("Failed to parse {}", path.display()));
                }
                ParseErrorPolicy::Skip => {
                    result.parse_errors.push(ParseErrorIssue {
                        file_path: display_path(path, root),
                        error: e.to_string(),
                    });
                    continue;
                }
            },
        };

        result.found.extend(extract_parsed(&parsed, config.bindings));
        result.files_scanned += 1;
    }

    Ok(result)
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
