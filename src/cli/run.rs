//! Dispatches parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command's summary and diagnostics
//! - `Err` if the command fails (e.g., unreadable snapshot, invalid config)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, audit::audit, export::export, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
