//! Catalogue id listing tool definition.
//!
//! Lists the metadata repository directory and maps JSON file entries to
//! catalogue summaries.

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
use crate::domains::tools::definitions::common::{CatalogueSummary, envelope_result};

/// Parameters for the id listing tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCatalogueIdsParams {}

/// Catalogue id listing tool.
pub struct ListCatalogueIdsTool;

impl ListCatalogueIdsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_catalogue_ids";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all known catalogue ids from the metadata repository, with file names, sizes, and direct download URLs.";

    /// Execute the tool logic.
    pub async fn execute(
        _params: &ListCatalogueIdsParams,
        upstream: &UpstreamClients,
    ) -> Result<CallToolResult, ToolError> {
        info!("Listing catalogue metadata entries");

        let entries = upstream.meta.list_entries().await?;
        let catalogues: Vec<CatalogueSummary> = entries
            .iter()
            .filter_map(CatalogueSummary::from_entry)
            .collect();
        let count = catalogues.len();

        envelope_result(json!({
            "catalogues": catalogues,
            "count": count,
            "message": format!("Found {count} catalogue metadata file(s)."),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListCatalogueIdsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domains::tools::definitions::common::test_support::{envelope_json, upstream_for};

    const MIXED_LISTING: &str = r#"[
        {"name": "air_pollution.json", "type": "file", "size": 812,
         "download_url": "https://raw.example.com/air_pollution.json"},
        {"name": "population.json", "type": "file", "size": 1024,
         "download_url": "https://raw.example.com/population.json"},
        {"name": "notes.txt", "type": "file", "size": 64,
         "download_url": "https://raw.example.com/notes.txt"},
        {"name": "archive", "type": "dir", "size": 0, "download_url": null}
    ]"#;

    #[tokio::test]
    async fn test_filters_to_json_files_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/contents")
            .with_body(MIXED_LISTING)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let result = ListCatalogueIdsTool::execute(&ListCatalogueIdsParams::default(), &upstream)
            .await
            .unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["count"], 2);
        let catalogues = envelope["catalogues"].as_array().unwrap();
        assert_eq!(catalogues.len(), 2);
        assert_eq!(catalogues[0]["id"], "air_pollution");
        assert_eq!(catalogues[1]["id"], "population");
        assert_eq!(catalogues[1]["size"], 1024);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_failure_escalates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/contents")
            .with_status(403)
            .with_body(r#"{"message":"API rate limit exceeded"}"#)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let err = ListCatalogueIdsTool::execute(&ListCatalogueIdsParams::default(), &upstream)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("rate limit"));
    }
}
