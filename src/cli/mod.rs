//! Command-line interface layer.
//!
//! Separate from the core so the audit engine can be used as a library.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, OutputFormat};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose)?;

    Ok(ExitStatus::from_result(&result).into())
}
