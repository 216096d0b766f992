//! Command-line interface layer.

pub mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::build_request;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.init {
        let path = run::init(&args)?;
        report::print_init(&path);
        return Ok(ExitStatus::Success);
    }

    let report = run::run(&args)?;
    report::print(&report, &args.root, args.verbose);

    Ok(ExitStatus::Success)
}
