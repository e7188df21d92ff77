use anyhow::Result;

use super::super::args::AuditCommand;
use super::{AuditReport, CommandResult, CommandSummary};
use crate::core::AuditContext;

pub fn audit(cmd: AuditCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(cmd.common.audit_options())?;
    let outcome = ctx.run()?;
    let analysis = outcome.analysis;

    Ok(CommandResult {
        summary: CommandSummary::Audit(AuditReport {
            report: analysis.report,
            page_name: outcome.page_name,
            summary: analysis.summary,
            variable_count: outcome.variable_count,
            format: cmd.format,
        }),
        diagnostics: analysis.diagnostics,
    })
}
