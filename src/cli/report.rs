//! Report formatting and printing utilities.
//!
//! Separate from core logic so the scanner can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::run::RunOutcome;
use crate::issues::ParseErrorIssue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Notice mark for runs that found nothing.
pub const NOTICE_MARK: &str = "!";

pub fn print(outcome: &RunOutcome, verbose: bool) {
    match &outcome.written {
        Some(path) => print_written(outcome.entry_count, path),
        None => print_nothing_found(),
    }

    let mut stderr = io::stderr().lock();
    if verbose {
        print_scanned_to(outcome.files_scanned, &mut stderr);
    }
    print_skipped_warning_to(outcome.skipped_count, verbose, &mut stderr);
    print_parse_warning_to(&outcome.parse_errors, verbose, &mut stderr);
}

/// Print the confirmation after the template was written.
pub fn print_written(count: usize, output: &Path) {
    print_written_to(count, output, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(count: usize, output: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "[{}] {}",
        SUCCESS_MARK.green(),
        format!("Wrote {} entries to {}", count, output.display()).green()
    );
}

/// Print the notice for a run that found no variables.
pub fn print_nothing_found() {
    print_nothing_found_to(&mut io::stdout().lock());
}

pub fn print_nothing_found_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "[{}] No environment variables found.",
        NOTICE_MARK.yellow()
    );
}

/// Print how many source files were parsed (verbose only).
pub fn print_scanned_to<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} source {}",
        files_scanned,
        if files_scanned == 1 { "file" } else { "files" }
    );
}

/// Print a warning about paths the walk could not access.
///
/// Under `verbose` each path was already reported while walking.
pub fn print_skipped_warning_to<W: Write>(skipped_count: usize, verbose: bool, writer: &mut W) {
    if skipped_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            skipped_count,
            "-v".cyan()
        );
    }
}

/// Print a parse warning to a custom writer.
///
/// Without `verbose` only the count is shown; with it, one line per file.
pub fn print_parse_warning_to<W: Write>(
    issues: &[ParseErrorIssue],
    verbose: bool,
    writer: &mut W,
) {
    if issues.is_empty() {
        return;
    }

    if verbose {
        for issue in issues {
            let _ = writeln!(
                writer,
                "{} {} could not be parsed: {}",
                "warning:".bold().yellow(),
                issue.file_path,
                issue.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            issues.len(),
            "-v".cyan()
        );
    }
}
