//! Catalogue data tool definition.
//!
//! Fetches catalogue records from the open-data API, optionally scoped to a
//! single dataset and a record limit.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::core::upstream::UpstreamClients;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::envelope_result;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the catalogue data tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCatalogueDataParams {
    /// Dataset id to fetch. Omit to list all catalogues.
    #[serde(default)]
    #[schemars(description = "ID of the dataset (optional; omit to fetch all catalogues)")]
    pub id: Option<String>,

    /// Maximum number of records to return.
    #[serde(default)]
    #[schemars(description = "Maximum number of records to return (optional)")]
    pub limit: Option<u64>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Catalogue data tool - fetches catalogue records from the open-data API.
pub struct GetCatalogueDataTool;

impl GetCatalogueDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_catalogue_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch data catalogues from the data.gov.my open data API. Optionally scope to a single dataset id and limit the number of records returned.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetCatalogueDataParams,
        upstream: &UpstreamClients,
    ) -> Result<CallToolResult, ToolError> {
        info!(id = ?params.id, limit = ?params.limit, "Fetching data catalogues");

        let body = upstream
            .data
            .get_catalogue(params.id.as_deref(), params.limit)
            .await?;

        envelope_result(json!({
            "catalogues": body,
            "message": "Catalogues fetched successfully.",
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCatalogueDataParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
