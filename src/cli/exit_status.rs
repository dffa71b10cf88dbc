use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the run completed, whether or not anything was found
/// - `Error` (2): the run failed (unreadable root, parse error, write error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The run completed.
    Success,
    /// The run failed before a template could be written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
