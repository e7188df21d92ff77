use anyhow::Result;

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportReport};
use crate::{core::AuditContext, export::write_csv};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(cmd.common.audit_options())?;
    let outcome = ctx.run()?;

    let quoting = cmd.quoting.unwrap_or(ctx.config.csv_quoting);
    let path = ctx.output_path(cmd.output.as_deref());
    let rows = outcome.analysis.report.render_rows();
    let export = write_csv(&path, &rows, quoting)?;

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportReport {
            export,
            page_name: outcome.page_name,
        }),
        diagnostics: outcome.analysis.diagnostics,
    })
}
