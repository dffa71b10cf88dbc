//! Ignore rules read from the project's ignore file.
//!
//! This is a reduced reading of the format, not a gitignore implementation:
//! no negation, no nested ignore files, no escaping. A line ending in `/`
//! names a directory relative to the root; any other line names a file
//! pattern matched against the end of the path or the exact file name.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{MatchOptions, Pattern};

const COMMENT_MARKER: char = '#';

const COMPONENT_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Default)]
pub struct IgnoreRules {
    dir_patterns: Vec<PathBuf>,
    file_patterns: Vec<FilePattern>,
}

#[derive(Debug)]
struct FilePattern {
    /// The line as written, for exact file name comparison.
    raw: String,
    components: Vec<ComponentPattern>,
}

#[derive(Debug)]
enum ComponentPattern {
    Glob(Pattern),
    /// Text that `glob` rejects (e.g. an unclosed `[`) is compared literally.
    Literal(String),
}

impl ComponentPattern {
    fn matches(&self, component: &str) -> bool {
        match self {
            ComponentPattern::Glob(pattern) => pattern.matches_with(component, COMPONENT_MATCH),
            ComponentPattern::Literal(text) => text == component,
        }
    }
}

impl IgnoreRules {
    /// Load rules from the ignore file at `path`; a missing file yields empty rules.
    pub fn load(path: &Path, verbose: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse_with(&content, verbose)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read ignore file: {}", path.display()))
            }
        }
    }

    /// Parse ignore file content.
    pub fn parse(content: &str) -> Self {
        Self::parse_with(content, false)
    }

    fn parse_with(content: &str, verbose: bool) -> Self {
        let mut rules = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            // Candidates are relative paths, so a rooted pattern never matches.
            if line.starts_with('/') {
                if verbose {
                    eprintln!(
                        "{} Ignore pattern '{}' starts with '/' and matches nothing",
                        "warning:".bold().yellow(),
                        line
                    );
                }
                continue;
            }

            if line.ends_with('/') {
                let dir: PathBuf = Path::new(line)
                    .components()
                    .filter(|c| !matches!(c, Component::CurDir))
                    .collect();
                if !dir.as_os_str().is_empty() {
                    rules.dir_patterns.push(dir);
                }
                continue;
            }

            let components = line
                .split('/')
                .filter(|part| !part.is_empty() && *part != ".")
                .map(|part| match Pattern::new(part) {
                    Ok(pattern) => ComponentPattern::Glob(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob in ignore pattern '{}': {} (matching literally)",
                                "warning:".bold().yellow(),
                                line,
                                e
                            );
                        }
                        ComponentPattern::Literal(part.to_string())
                    }
                })
                .collect();

            rules.file_patterns.push(FilePattern {
                raw: line.to_string(),
                components,
            });
        }

        rules
    }

    pub fn is_empty(&self) -> bool {
        self.dir_patterns.is_empty() && self.file_patterns.is_empty()
    }

    /// Whether `rel` (relative to the root) equals or lies under an ignored directory.
    pub fn is_dir_ignored(&self, rel: &Path) -> bool {
        self.dir_patterns.iter().any(|dir| rel.starts_with(dir))
    }

    /// Whether `rel` (relative to the root) matches a file pattern.
    pub fn is_file_ignored(&self, rel: &Path) -> bool {
        let parts: Vec<&str> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect();
        let file_name = rel.file_name().and_then(|n| n.to_str());

        self.file_patterns
            .iter()
            .any(|pattern| file_name == Some(pattern.raw.as_str()) || pattern.matches(&parts))
    }

    /// Whether a candidate file at `rel` is excluded by any rule.
    pub fn is_ignored(&self, rel: &Path) -> bool {
        self.is_dir_ignored(rel) || self.is_file_ignored(rel)
    }
}

impl FilePattern {
    /// Match path components from the right, one pattern component each.
    fn matches(&self, parts: &[&str]) -> bool {
        if self.components.is_empty() {
            return false;
        }
        if parts.len() < self.components.len() {
            return false;
        }
        parts
            .iter()
            .rev()
            .zip(self.components.iter().rev())
            .all(|(part, pattern)| pattern.matches(part))
    }
}
