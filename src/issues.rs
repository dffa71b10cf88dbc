//! Per-file problems recorded during a scan.
//!
//! A scan only records problems when it is asked to keep going past them;
//! otherwise the first failure ends the run as an error.

use std::{cmp::Ordering, fmt};

/// A source file that was left out because it is not valid Python.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    /// Path relative to the project root, `/`-separated.
    pub file_path: String,
    /// Parser message, including the position of the first syntax error.
    pub error: String,
}

impl fmt::Display for ParseErrorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_path, self.error)
    }
}

impl Ord for ParseErrorIssue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.error.cmp(&other.error))
    }
}

impl PartialOrd for ParseErrorIssue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
