use std::path::PathBuf;

use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::Config,
    core::{collect, emit},
    issues::ParseErrorIssue,
};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Template path, or `None` when nothing was found and no file was written.
    pub written: Option<PathBuf>,
    pub entry_count: usize,
    pub files_scanned: usize,
    /// Directory entries the walk could not access.
    pub skipped_count: usize,
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Run one scan from parsed arguments.
///
/// Collects names under the project root and writes the template unless
/// nothing was found.
///
/// # Returns
/// - `Ok(RunOutcome)` describing what was written and which files were skipped
/// - `Err` if the root is unusable, a file cannot be read or parsed (under
///   the abort policy), or the template cannot be written
pub fn run(args: Arguments) -> Result<RunOutcome> {
    let config = Config::from(args);
    let mut result = collect(&config)?;
    result.parse_errors.sort();

    let (written, entry_count) = if result.found.is_empty() {
        (None, 0)
    } else {
        let count = emit(&result.found, &config.output)?;
        (Some(config.output), count)
    };

    Ok(RunOutcome {
        written,
        entry_count,
        files_scanned: result.files_scanned,
        skipped_count: result.skipped_count,
        parse_errors: result.parse_errors,
    })
}
