//! CLI argument definitions using clap.
//!
//! `sample-env` takes a single project directory and writes a `.env.sample`
//! template listing every environment variable the Python sources read.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{Config, DEFAULT_OUTPUT_FILE, IGNORE_FILE_NAME},
    core::{BindingMode, ParseErrorPolicy},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Template file to write (relative to the current directory)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Ignore file read from the project root
    #[arg(long, value_name = "NAME", default_value = IGNORE_FILE_NAME)]
    pub ignore_file: String,

    /// What to do with a source file that is not valid Python
    #[arg(long, value_enum, default_value_t = ParseErrorPolicy::Abort)]
    pub on_parse_error: ParseErrorPolicy,

    /// How `os` and `environ` references are recognized
    #[arg(long, value_enum, default_value_t = BindingMode::Names)]
    pub bindings: BindingMode,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Arguments> for Config {
    fn from(args: Arguments) -> Self {
        Self {
            root: args.project_dir,
            output: args.output,
            ignore_file: args.ignore_file,
            on_parse_error: args.on_parse_error,
            bindings: args.bindings,
            verbose: args.verbose,
        }
    }
}
