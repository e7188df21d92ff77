//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the spacing audit to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and tool handlers
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{SpacingAuditMcpServer, run_server};
