//! Single catalogue tool definition.
//!
//! Fetches one catalogue from the open-data API by its required id.

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
use crate::domains::tools::definitions::common::{envelope_result, require_non_empty};

/// Parameters for the single catalogue tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCatalogueParams {
    /// ID of the dataset to fetch.
    #[schemars(description = "ID of the dataset")]
    pub id: String,
}

/// Single catalogue tool - fetches one catalogue by id.
pub struct GetCatalogueTool;

impl GetCatalogueTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_catalogue";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch a specific data catalogue from the data.gov.my open data API by its id.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetCatalogueParams,
        upstream: &UpstreamClients,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty(&params.id, "id")?;

        info!(id = %params.id, "Fetching catalogue");

        let body = upstream.data.get_catalogue(Some(&params.id), None).await?;

        envelope_result(json!({
            "catalogue": body,
            "message": "Catalogue fetched successfully.",
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCatalogueParams>(),
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
    use mockito::Matcher;

    use crate::domains::tools::definitions::common::test_support::{envelope_json, upstream_for};

    #[test]
    fn test_params_require_id() {
        let parsed: Result<GetCatalogueParams, _> = serde_json::from_str("{}");
        let err = parsed.unwrap_err().to_string();
        assert!(err.contains("id"));
    }

    #[tokio::test]
    async fn test_empty_id_rejected_without_outbound_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data-catalogue")
            .expect(0)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let params = GetCatalogueParams { id: "  ".to_string() };
        let err = GetCatalogueTool::execute(&params, &upstream).await.unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("id"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_catalogue_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data-catalogue")
            .match_query(Matcher::UrlEncoded("id".into(), "fuelprice".into()))
            .with_body(r#"{"id":"fuelprice","rows":[{"ron95":2.05}]}"#)
            .create_async()
            .await;

        let upstream = upstream_for(&server.url());
        let params = GetCatalogueParams { id: "fuelprice".to_string() };
        let result = GetCatalogueTool::execute(&params, &upstream).await.unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["catalogue"]["id"], "fuelprice");
        assert_eq!(envelope["message"], "Catalogue fetched successfully.");
        mock.assert_async().await;
    }
}
