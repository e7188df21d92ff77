//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `audit`: Count token and raw spacing values on a page
//! - `export`: Write the audit report as CSV
//! - `init`: Initialize a configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{core::AuditOptions, export::CsvQuoting};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Audit(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by audit and export.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (config file lookup and relative paths)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Document snapshot to audit (overrides config file)
    #[arg(short, long, env = "SPACING_AUDIT_DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Page id or name to audit (overrides config file)
    #[arg(long)]
    pub page: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            root: self.path.clone(),
            document: self.document.clone(),
            page: self.page.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with a summary line
    #[default]
    Table,
    /// The `results` message as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// CSV file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cell escaping (overrides config file)
    #[arg(long, value_enum)]
    pub quoting: Option<CsvQuoting>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count spacing tokens and raw spacing values used by auto-layout containers
    Audit(AuditCommand),
    /// Export the audit report as CSV
    Export(ExportCommand),
    /// Initialize a new .spacingauditrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
