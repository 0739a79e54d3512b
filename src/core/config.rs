//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream HTTP API configuration.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream HTTP APIs.
///
/// The base URLs default to the public endpoints but can be overridden
/// through the environment, which is also how tests point the clients at a
/// local mock server.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the open-data API.
    pub data_base_url: String,

    /// Contents-API URL of the metadata repository directory. One JSON file
    /// per catalogue lives under this path.
    pub meta_contents_url: String,

    /// Optional GitHub token. Not required for any tool; only raises the
    /// upstream rate limit.
    pub github_token: Option<String>,

    /// Per-request timeout for all upstream calls, in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("data_base_url", &self.data_base_url)
            .field("meta_contents_url", &self.meta_contents_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            data_base_url: "https://api.data.gov.my".to_string(),
            meta_contents_url:
                "https://api.github.com/repos/data-gov-my/datagovmy-meta/contents/data-catalogue"
                    .to_string(),
            github_token: None,
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "data-catalogue-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_DATA_BASE_URL") {
            config.upstream.data_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_META_CONTENTS_URL") {
            config.upstream.meta_contents_url = url;
        }

        if let Ok(token) = std::env::var("MCP_GITHUB_TOKEN") {
            config.upstream.github_token = Some(token);
            info!("GitHub token loaded from environment");
        } else {
            warn!(
                "MCP_GITHUB_TOKEN not set - metadata repository requests are \
                 unauthenticated and subject to the lower rate limit"
            );
        }

        config
    }
}
