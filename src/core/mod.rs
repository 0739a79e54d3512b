//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the upstream HTTP clients, the
//! server lifecycle, and the stdio transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod upstream;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
pub use upstream::UpstreamClients;
