//! Spacing Audit - spacing token usage report for design documents
//!
//! Spacing Audit is a CLI tool and library that walks one page of a design
//! document snapshot and counts how often each spacing value is bound to a
//! design variable (a token) versus set as a raw pixel value. The report can
//! be printed, emitted as a results message, or exported as CSV.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Variable resolution, tree flattening and token analysis
//! - `diagnostics`: Bindings that could not be fully resolved
//! - `document`: Document snapshot model
//! - `export`: CSV serialization
//! - `mcp`: Model Context Protocol server implementation
//! - `messages`: Messages exchanged with the presentation layer
//! - `report`: Token usage report

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod document;
pub mod export;
pub mod mcp;
pub mod messages;
pub mod report;
