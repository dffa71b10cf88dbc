//! sample-env - `.env.sample` generator for Python projects
//!
//! Scans a Python source tree for environment variables read through the
//! `os` module (`os.getenv`, `os.environ[...]`, `environ.get`, ...) and
//! writes a sorted `NAME=` template listing every literal name found.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report)
//! - `config`: Run settings and their validation
//! - `core`: Scanning engine (collect, extract, emit)
//! - `issues`: Per-file problems recorded during a scan

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
