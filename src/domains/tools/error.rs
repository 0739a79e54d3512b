//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use thiserror::Error;
use tracing::error;

use crate::core::upstream::UpstreamError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An upstream API call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Map tool errors onto MCP protocol error codes. Every error crossing this
/// boundary is also logged, so operators keep a stderr trail independent of
/// what the caller receives.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        error!("{err}");
        match err {
            ToolError::NotFound(name) => McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {name}"),
                None,
            ),
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::Upstream(upstream) => McpError::internal_error(upstream.to_string(), None),
            ToolError::Internal(msg) => McpError::internal_error(msg, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_echoes_tool_name() {
        let err = ToolError::not_found("get_weather");
        assert_eq!(err.to_string(), "Unknown tool: get_weather");

        let mcp: McpError = err.into();
        assert_eq!(mcp.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(mcp.message.contains("get_weather"));
    }

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let mcp: McpError = ToolError::invalid_arguments("Missing required parameter: id").into();
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("id"));
    }

    #[test]
    fn test_upstream_maps_to_internal_error() {
        let mcp: McpError = ToolError::Upstream(UpstreamError::Api("Not Found".to_string())).into();
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
        assert!(mcp.message.contains("Not Found"));
    }
}
