//! STDIO transport for the MCP server.
//!
//! Standard input/output is the only supported transport: the hosting client
//! spawns this process and speaks MCP over its stdin/stdout. Framing and the
//! protocol handshake belong to the rmcp SDK.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// IO error during transport.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TransportError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over stdin/stdout until the client disconnects or the
    /// process receives an interrupt. Both paths exit cleanly.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, closing transport");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
