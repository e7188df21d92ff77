use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::AuditSummary,
    diagnostics::Diagnostic,
    export::CsvQuoting,
    messages::{InboundMessage, OutboundMessage},
};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project directory
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub document: String,
    pub output: String,
    pub csv_quoting: CsvQuoting,
    pub page: Option<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            document: c.document,
            output: c.output,
            csv_quoting: c.csv_quoting,
            page: c.page,
        }
    }
}

// ============================================================
// Audit Types (audit_spacing)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditSpacingParams {
    /// Absolute path of the project directory
    pub project_root_path: String,
    /// Document snapshot path (overrides config file)
    #[serde(default)]
    pub document_path: Option<String>,
    /// Page id or name (overrides config file)
    #[serde(default)]
    pub page: Option<String>,
}

/// Result of audit_spacing: the results message plus run statistics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSpacingResult<'a> {
    pub message: OutboundMessage<'a>,
    pub page_name: Option<String>,
    pub variable_count: usize,
    pub summary: AuditSummary,
    pub diagnostics: &'a [Diagnostic],
}

// ============================================================
// Export Types (export_csv, handle_message)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportCsvParams {
    /// Absolute path of the project directory
    pub project_root_path: String,
    /// Document snapshot path (overrides config file)
    #[serde(default)]
    pub document_path: Option<String>,
    /// Page id or name (overrides config file)
    #[serde(default)]
    pub page: Option<String>,
    /// CSV file to write, relative to the project directory (overrides config file)
    #[serde(default)]
    pub output_path: Option<String>,
    /// Cell escaping (overrides config file)
    #[serde(default)]
    pub quoting: Option<CsvQuoting>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandleMessageParams {
    /// Absolute path of the project directory
    pub project_root_path: String,
    /// Message from the presentation layer, e.g. {"type": "export"}
    pub message: InboundMessage,
}
