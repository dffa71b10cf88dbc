use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunOutcome, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let outcome = run(args)?;
    report::print(&outcome, verbose);

    Ok(ExitStatus::Success)
}
