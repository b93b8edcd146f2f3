//! Error handling utilities for MCP server

use homie_core::DashboardError;
use rmcp::ErrorData;

/// Helper to convert dashboard errors to MCP errors
pub fn to_mcp_error(message: &str, error: &DashboardError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}
