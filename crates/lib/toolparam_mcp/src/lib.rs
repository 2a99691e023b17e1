//! # toolparam_mcp
//!
//! Boundary adapters between MCP tool discovery and the schema mapper.
//!
//! Decodes a captured `tools/list` payload into [`rmcp::model::Tool`] values,
//! converts each tool's `inputSchema` with [`toolparam_core::SchemaMapper`],
//! and renders the result for people.

pub mod error;
pub mod listing;
pub mod render;

pub use error::ListingError;
pub use listing::{ToolListing, list_tools, parse_tools, tool_parameters};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
