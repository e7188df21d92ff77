use crate::{
    core::AuditSummary, diagnostics::Diagnostic, export::ExportSummary, report::Report,
};

use super::super::args::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Audit(AuditReport),
    Export(ExportReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AuditReport {
    pub report: Report,
    pub page_name: Option<String>,
    pub summary: AuditSummary,
    pub variable_count: usize,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct ExportReport {
    pub export: ExportSummary,
    pub page_name: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running spacing-audit commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Non-fatal findings from the audit. Empty for `init`.
    pub diagnostics: Vec<Diagnostic>,
}

impl CommandResult {
    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            diagnostics: Vec::new(),
        }
    }
}
