//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of tool calls by name
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::upstream::UpstreamClients;

use super::definitions::{
    GetCatalogueDataTool, GetCatalogueMetadataTool, GetCatalogueTool, ListCatalogueIdsTool,
    SearchCataloguesTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
///
/// Holds the shared upstream client handles and dispatches calls to the
/// matching handler. Arguments are validated into the tool's parameter
/// struct before any handler code runs.
pub struct ToolRegistry {
    upstream: Arc<UpstreamClients>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(upstream: Arc<UpstreamClients>) -> Self {
        Self { upstream }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetCatalogueDataTool::NAME,
            GetCatalogueTool::NAME,
            ListCatalogueIdsTool::NAME,
            GetCatalogueMetadataTool::NAME,
            SearchCataloguesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised tool surface;
    /// the server answers list-tools queries from it.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetCatalogueDataTool::to_tool(),
            GetCatalogueTool::to_tool(),
            ListCatalogueIdsTool::to_tool(),
            GetCatalogueMetadataTool::to_tool(),
            SearchCataloguesTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            GetCatalogueDataTool::NAME => {
                GetCatalogueDataTool::execute(&parse_params(arguments)?, &self.upstream).await
            }
            GetCatalogueTool::NAME => {
                GetCatalogueTool::execute(&parse_params(arguments)?, &self.upstream).await
            }
            ListCatalogueIdsTool::NAME => {
                ListCatalogueIdsTool::execute(&parse_params(arguments)?, &self.upstream).await
            }
            GetCatalogueMetadataTool::NAME => {
                GetCatalogueMetadataTool::execute(&parse_params(arguments)?, &self.upstream).await
            }
            SearchCataloguesTool::NAME => {
                SearchCataloguesTool::execute(&parse_params(arguments)?, &self.upstream).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

/// Validate raw arguments into a tool's parameter struct. The serde error
/// message names the offending field.
fn parse_params<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
