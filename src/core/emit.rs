use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::extract::FoundSet;

/// Render the template: one `NAME=` line per entry, sorted by name.
pub fn render(found: &FoundSet) -> String {
    let mut names: Vec<&str> = found.iter().map(String::as_str).collect();
    names.sort_unstable();

    let mut out = String::with_capacity(names.iter().map(|n| n.len() + 2).sum());
    for name in names {
        out.push_str(name);
        out.push_str("=\n");
    }
    out
}

/// Write the template to `output`, replacing any existing file.
///
/// Returns the number of entries written. Callers are expected to skip the
/// write entirely when `found` is empty.
pub fn emit(found: &FoundSet, output: &Path) -> Result<usize> {
    fs::write(output, render(found))
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    Ok(found.len())
}
