//! Catalogue metadata tool definition.
//!
//! Fetches one metadata file through the contents API and decodes its
//! base64-embedded JSON payload.

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
use crate::domains::tools::definitions::common::{
    METADATA_SUFFIX, envelope_result, require_non_empty,
};

/// Parameters for the catalogue metadata tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCatalogueMetadataParams {
    /// ID of the catalogue whose metadata file to fetch.
    #[schemars(description = "ID of the catalogue")]
    pub id: String,
}

/// Catalogue metadata tool.
pub struct GetCatalogueMetadataTool;

impl GetCatalogueMetadataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_catalogue_metadata";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the descriptive metadata of a catalogue from the metadata repository. The repository stores one JSON file per catalogue id.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetCatalogueMetadataParams,
        upstream: &UpstreamClients,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty(&params.id, "id")?;

        info!(id = %params.id, "Fetching catalogue metadata");

        let file_name = format!("{}{METADATA_SUFFIX}", params.id);
        let file = upstream.meta.fetch_entry(&file_name).await?;
        let metadata = file.decode_json()?;

        envelope_result(json!({
            "id": params.id,
            "metadata": metadata,
            "message": "Catalogue metadata fetched successfully.",
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCatalogueMetadataParams>(),
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
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    use crate::domains::tools::definitions::common::test_support::{envelope_json, upstream_for};

    #[tokio::test]
    async fn test_decodes_embedded_metadata() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "name": "population.json",
            "encoding": "base64",
            "content": STANDARD.encode(r#"{"title":"X"}"#),
        });
        let mock = server
            .mock("GET", "/contents/population.json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let params = GetCatalogueMetadataParams { id: "population".to_string() };
        let result = GetCatalogueMetadataTool::execute(&params, &upstream).await.unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["id"], "population");
        assert_eq!(envelope["metadata"], json!({"title": "X"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_id_rejected_without_outbound_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let params = GetCatalogueMetadataParams { id: String::new() };
        let err = GetCatalogueMetadataTool::execute(&params, &upstream).await.unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_id_surfaces_upstream_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/contents/nope.json")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let params = GetCatalogueMetadataParams { id: "nope".to_string() };
        let err = GetCatalogueMetadataTool::execute(&params, &upstream).await.unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }
}
