//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines a parameters struct, an `execute()` method, and its
//! metadata. The ToolRegistry in `domains/tools/registry.rs` is the single
//! dispatch point, so adding a new tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use super::upstream::UpstreamClients;
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. The upstream
/// HTTP clients are built once here and shared across all invocations
/// through the tool registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls to their handlers.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the configured upstream base URLs are malformed.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = Arc::new(config);
        let upstream = Arc::new(UpstreamClients::new(&config.upstream)?);
        let registry = Arc::new(ToolRegistry::new(upstream));

        Ok(Self { config, registry })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Dispatch a tool call through the registry, mapping tool errors onto
    /// MCP protocol errors. This is the path `call_tool` serves.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .call_tool(name, arguments)
            .await
            .map_err(McpError::from)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Data catalogue MCP server. Exposes tools for browsing and searching \
                 the data.gov.my open data catalogue and its metadata repository."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = serde_json::Value::Object(request.arguments.unwrap_or_default());
        self.dispatch_tool(&request.name, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_construction() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "data-catalogue-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_advertises_tools_capability() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_malformed_base_url_rejected() {
        let mut config = Config::default();
        config.upstream.data_base_url = "definitely not a url".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_method_not_found_with_name() {
        let server = McpServer::new(Config::default()).unwrap();
        let err = server.dispatch_tool("get_weather", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(err.message.contains("get_weather"));
    }

    #[tokio::test]
    async fn test_missing_argument_is_invalid_params() {
        // Validation fails before any handler or network code runs, so the
        // default (real) upstream URLs are never contacted.
        let server = McpServer::new(Config::default()).unwrap();
        let err = server.dispatch_tool("get_catalogue", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("id"));
    }
}
