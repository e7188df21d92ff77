use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::{AuditContext, AuditOptions},
    export::{CsvQuoting, ExportSummary, write_csv},
    messages::{InboundMessage, OutboundMessage},
};

use super::types::{
    AuditSpacingParams, AuditSpacingResult, ConfigDto, ConfigValues, ExportCsvParams,
    GetConfigParams, HandleMessageParams,
};

#[derive(Clone)]
pub struct SpacingAuditMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for SpacingAuditMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl SpacingAuditMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current spacing-audit configuration
    #[tool(description = "Get the current spacing-audit configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// Count spacing token and raw value usages on one page
    #[tool(
        description = "Audit spacing on one page of a document snapshot. Returns the results message (token name or raw value -> value, count, classification), run statistics, and unresolved variable bindings."
    )]
    pub async fn audit_spacing(
        &self,
        params: Parameters<AuditSpacingParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let options = AuditOptions {
            document: params.document_path.map(PathBuf::from),
            page: params.page,
            ..AuditOptions::new(&params.project_root_path)
        };

        let ctx = AuditContext::new(options)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
        let outcome = ctx
            .run()
            .map_err(|e| McpError::internal_error(format!("Audit failed: {:#}", e), None))?;

        let analysis = &outcome.analysis;
        let result = AuditSpacingResult {
            message: OutboundMessage::Results {
                tokens: &analysis.report,
            },
            page_name: outcome.page_name.clone(),
            variable_count: outcome.variable_count,
            summary: analysis.summary,
            diagnostics: &analysis.diagnostics,
        };

        json_result(&result)
    }

    /// Write the audit report as CSV
    #[tool(
        description = "Audit spacing on one page and write the report as a CSV file (Token, Value, Count, Type). Returns the written file path, MIME type and row count."
    )]
    pub async fn export_csv(
        &self,
        params: Parameters<ExportCsvParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let options = AuditOptions {
            document: params.document_path.map(PathBuf::from),
            page: params.page,
            ..AuditOptions::new(&params.project_root_path)
        };
        let output = params.output_path.map(PathBuf::from);

        let summary = export_report(options, output.as_deref(), params.quoting)?;
        json_result(&summary)
    }

    /// Dispatch a message from the presentation layer
    #[tool(
        description = "Handle a message from the presentation layer. {\"type\": \"export\"} audits with the project configuration and writes the CSV export. Other message types are rejected."
    )]
    pub async fn handle_message(
        &self,
        params: Parameters<HandleMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        match params.message {
            InboundMessage::Export => {
                let options = AuditOptions::new(&params.project_root_path);
                let summary = export_report(options, None, None)?;
                json_result(&summary)
            }
        }
    }
}

/// Audit, then write the ranked rows to the configured (or overridden) CSV path.
fn export_report(
    options: AuditOptions,
    output: Option<&Path>,
    quoting: Option<CsvQuoting>,
) -> Result<ExportSummary, McpError> {
    let ctx = AuditContext::new(options)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
    let outcome = ctx
        .run()
        .map_err(|e| McpError::internal_error(format!("Audit failed: {:#}", e), None))?;

    let rows = outcome.analysis.report.render_rows();
    let path = ctx.output_path(output);
    let quoting = quoting.unwrap_or(ctx.config.csv_quoting);

    write_csv(&path, &rows, quoting)
        .map_err(|e| McpError::internal_error(format!("Export failed: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for SpacingAuditMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Spacing Audit MCP reports how consistently a design document uses spacing tokens.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (document path, CSV output, page)\n\
                 2. audit_spacing - Count token and raw spacing values on one page\n\
                 3. export_csv - Write the audit report as CSV\n\
                 4. handle_message - Dispatch a presentation-layer message such as {\"type\": \"export\"}\n\n\
                 Recommended Workflow:\n\
                 1. Use audit_spacing to see which spacing values are bound to variables\n\
                 2. Replace frequent raw values with the matching spacing tokens\n\
                 3. Use export_csv to share the report"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = SpacingAuditMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
