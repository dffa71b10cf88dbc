use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::core::{BindingMode, ParseErrorPolicy};

/// Ignore file read from the top level of the project root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Template file written when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = ".env.sample";

/// Extension of the source files that get scanned.
pub const SOURCE_EXTENSION: &str = "py";

/// Resolved settings for one run.
///
/// Built from command-line arguments; the ignore file at the project root
/// is the only other configuration input and is read by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root to scan.
    pub root: PathBuf,
    /// Where the template is written (relative to the working directory).
    pub output: PathBuf,
    /// Name of the ignore file looked up directly under `root`.
    pub ignore_file: String,
    /// What to do with a source file that does not parse.
    pub on_parse_error: ParseErrorPolicy,
    /// How `os` / `environ` references are identified.
    pub bindings: BindingMode,
    /// Print per-file diagnostics to stderr.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            ignore_file: IGNORE_FILE_NAME.to_string(),
            on_parse_error: ParseErrorPolicy::default(),
            bindings: BindingMode::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the root is not an existing directory or the
    /// ignore file name is not a bare file name.
    pub fn validate(&self) -> Result<()> {
        let metadata = self
            .root
            .metadata()
            .with_context(|| format!("Cannot access project root: {}", self.root.display()))?;
        if !metadata.is_dir() {
            bail!("Project root is not a directory: {}", self.root.display());
        }

        if !is_bare_file_name(&self.ignore_file) {
            bail!(
                "Invalid ignore file name \"{}\": expected a file name without directories",
                self.ignore_file
            );
        }

        Ok(())
    }

    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(&self.ignore_file)
    }
}

fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
