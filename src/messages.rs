//! Messages exchanged with the presentation layer.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::Report;

/// Emitted once an audit completes.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage<'a> {
    Results { tokens: &'a Report },
}

/// Requests from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InboundMessage {
    /// Serialize the current report and offer it as a CSV download.
    Export,
}

impl InboundMessage {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid message")
    }
}

pub fn results_message(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(&OutboundMessage::Results { tokens: report })
        .context("Failed to serialize results message")
}
