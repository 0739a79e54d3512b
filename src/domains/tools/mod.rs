//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool is a thin translation from validated arguments into one or two
//! outbound HTTP calls, with the response reshaped into a JSON envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()` and
//!    `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs` (name list, tool models, dispatch)

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
