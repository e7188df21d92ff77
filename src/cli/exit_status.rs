use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed
/// - `Failure` (1): Command refused to act (e.g. `init` with an existing config)
/// - `Error` (2): Command failed due to internal error (unreadable snapshot, config error, etc.)
///
/// An audit never fails because of what it finds: it only counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command refused to act.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    pub(crate) fn from_result(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
