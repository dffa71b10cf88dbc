use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

use super::ignore_rules::IgnoreRules;
use crate::config::SOURCE_EXTENSION;

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate source files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Walk `root` and list every source file not excluded by `rules`.
///
/// Ignored directories are pruned rather than descended into.
pub fn scan_files(root: &Path, rules: &IgnoreRules, verbose: bool) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !entry.file_type().is_dir()
            || !rules.is_dir_ignored(relative_to(entry.path(), root))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() || !is_scannable_file(path) {
            continue;
        }
        if rules.is_ignored(relative_to(path, root)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn relative_to<'p>(path: &'p Path, root: &Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}
