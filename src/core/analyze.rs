//! Token analysis.
//!
//! Walks flattened nodes and counts every spacing value found on
//! auto-layout containers, classifying it as a token (bound to a variable)
//! or a raw value.

use serde::Serialize;

use crate::{
    diagnostics::{Diagnostic, NonNumericBinding, UnresolvedBinding},
    document::{AutoLayout, LayoutNode, SceneNode, SpacingFacet},
    report::{Classification, Report},
};

use super::variables::VariableTable;

/// Display value for a bound facet when neither the node nor the variable
/// provides a magnitude.
pub const UNSET_VALUE: &str = "unset";

/// Prefix of the report key used for bindings to unknown variables.
pub const UNRESOLVED_PREFIX: &str = "Variable ID: ";

/// Raw values are reported only when present and nonzero.
///
/// This applies to unbound values only; a bound value is always a token,
/// whatever its magnitude.
pub fn is_defined_nonzero(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0)
}

/// Format a magnitude the way the host prints numbers: `8 → "8px"`,
/// `8.5 → "8.5px"`.
pub fn format_px(value: f64) -> String {
    if value == 0.0 {
        // Also covers -0.0, which would otherwise print as "-0".
        return "0px".to_string();
    }
    format!("{}px", value)
}

/// Counts spent while auditing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub nodes_visited: usize,
    /// Frames, components and instances with auto-layout enabled.
    pub containers_audited: usize,
    pub token_occurrences: usize,
    pub raw_occurrences: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub report: Report,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: AuditSummary,
}

/// Incremental analyzer: feed nodes with [`Analyzer::visit`], then
/// [`Analyzer::finish`].
pub struct Analyzer<'t> {
    table: &'t VariableTable,
    analysis: Analysis,
}

impl<'t> Analyzer<'t> {
    pub fn new(table: &'t VariableTable) -> Self {
        Self {
            table,
            analysis: Analysis::default(),
        }
    }

    pub fn visit(&mut self, node: &LayoutNode) {
        self.analysis.summary.nodes_visited += 1;

        let Some(layout) = node.auto_layout() else {
            return;
        };
        if !layout.is_enabled() {
            return;
        }

        self.analysis.summary.containers_audited += 1;
        for facet in SpacingFacet::ALL {
            self.visit_facet(node, layout, facet);
        }
    }

    fn visit_facet(&mut self, node: &LayoutNode, layout: &AutoLayout, facet: SpacingFacet) {
        let value = layout.value(facet);

        match layout.binding(facet) {
            Some(variable_id) => {
                let key = self.token_key(node, facet, variable_id);
                let display = value
                    .or_else(|| self.table.numeric_value(variable_id))
                    .map(format_px)
                    .unwrap_or_else(|| UNSET_VALUE.to_string());

                self.analysis
                    .report
                    .record(key, display, Classification::Token);
                self.analysis.summary.token_occurrences += 1;
            }
            None if is_defined_nonzero(value) => {
                let raw = value.map(format_px).unwrap_or_default();

                self.analysis
                    .report
                    .record(raw.clone(), raw, Classification::RawValue);
                self.analysis.summary.raw_occurrences += 1;
            }
            None => {}
        }
    }

    /// Report key for a bound facet: `<collection>/<name>`, or the
    /// `Variable ID: <id>` fallback so unknown variables stay visible.
    fn token_key(&mut self, node: &LayoutNode, facet: SpacingFacet, variable_id: &str) -> String {
        let Some(record) = self.table.get(variable_id) else {
            self.analysis.diagnostics.push(
                UnresolvedBinding {
                    node_id: node.id().to_string(),
                    node_name: node.name().to_string(),
                    facet,
                    variable_id: variable_id.to_string(),
                }
                .into(),
            );
            return format!("{}{}", UNRESOLVED_PREFIX, variable_id);
        };

        let token_name = record.token_name();
        if record.resolved_value.is_some() && self.table.numeric_value(variable_id).is_none() {
            self.analysis.diagnostics.push(
                NonNumericBinding {
                    node_id: node.id().to_string(),
                    node_name: node.name().to_string(),
                    facet,
                    token_name: token_name.clone(),
                }
                .into(),
            );
        }
        token_name
    }

    pub fn finish(self) -> Analysis {
        self.analysis
    }
}

/// Count spacing usages across `nodes`.
pub fn analyze<'a, I>(nodes: I, table: &VariableTable) -> Report
where
    I: IntoIterator<Item = &'a LayoutNode>,
{
    analyze_with_diagnostics(nodes, table).report
}

/// Like [`analyze`], also returning diagnostics and counters.
pub fn analyze_with_diagnostics<'a, I>(nodes: I, table: &VariableTable) -> Analysis
where
    I: IntoIterator<Item = &'a LayoutNode>,
{
    let mut analyzer = Analyzer::new(table);
    for node in nodes {
        analyzer.visit(node);
    }
    analyzer.finish()
}
