//! Core audit engine.
//!
//! One audit run is a three-step pipeline over a document snapshot:
//!
//! 1. **Resolve**: `variables` builds the variable id → name table
//! 2. **Collect**: `collect` flattens the page tree in post-order
//! 3. **Analyze**: `analyze` counts token and raw spacing usages
//!
//! `context` loads configuration and the snapshot and runs the pipeline.

pub mod analyze;
pub mod collect;
pub mod context;
pub mod variables;

pub use analyze::{Analysis, Analyzer, AuditSummary, analyze, analyze_with_diagnostics};
pub use collect::{PostOrder, flatten};
pub use context::{AuditContext, AuditOptions, AuditOutcome};
pub use variables::{VariableRecord, VariableTable, build_variable_table};
