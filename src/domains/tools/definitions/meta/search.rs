//! Catalogue search tool definition.
//!
//! Searches catalogue metadata by keyword. The listing is fetched once, then
//! the raw metadata of at most [`CANDIDATE_CAP`] candidates is fetched with
//! bounded concurrency. A failed candidate fetch is logged and skipped, never
//! aborting the overall search.

use futures::{StreamExt, stream};
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::core::upstream::UpstreamClients;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    CatalogueSummary, envelope_result, require_non_empty,
};

/// Upper bound on per-candidate fetches, doubling as the concurrency limit.
/// Keeps one search under the unauthenticated upstream rate limit.
pub const CANDIDATE_CAP: usize = 20;

/// Parameters for the catalogue search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCataloguesParams {
    /// Keyword to match against title, description, and id.
    #[schemars(description = "Keyword to search for (case-insensitive substring match)")]
    pub keyword: String,
}

/// One search hit, tagged with the field that matched.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SearchMatch {
    /// Catalogue id.
    pub id: String,

    /// Title from the metadata file, when present.
    pub title: Option<String>,

    /// Which field matched: "title", "description", or "id".
    pub match_reason: String,
}

/// Catalogue search tool.
pub struct SearchCataloguesTool;

impl SearchCataloguesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_catalogues";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search catalogues by keyword against the title, description, and id of their metadata files. Checks at most the first 20 catalogues of the repository listing.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &SearchCataloguesParams,
        upstream: &UpstreamClients,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty(&params.keyword, "keyword")?;
        let keyword = params.keyword.trim().to_lowercase();

        info!(keyword = %keyword, "Searching catalogues");

        let entries = upstream.meta.list_entries().await?;
        let candidates: Vec<CatalogueSummary> = entries
            .iter()
            .filter_map(CatalogueSummary::from_entry)
            .take(CANDIDATE_CAP)
            .collect();

        // `buffered` preserves listing order, so the match list is
        // deterministic regardless of fetch completion order.
        let outcomes: Vec<Option<SearchMatch>> = stream::iter(candidates)
            .map(|candidate| {
                let keyword = keyword.clone();
                async move {
                    match upstream.meta.fetch_raw_json(&candidate.download_url).await {
                        Ok(doc) => match_candidate(&candidate, &doc, &keyword),
                        Err(err) => {
                            warn!(id = %candidate.id, error = %err, "Skipping candidate, metadata fetch failed");
                            None
                        }
                    }
                }
            })
            .buffered(CANDIDATE_CAP)
            .collect()
            .await;

        let matches: Vec<SearchMatch> = outcomes.into_iter().flatten().collect();
        let count = matches.len();

        envelope_result(json!({
            "keyword": params.keyword,
            "matches": matches,
            "count": count,
            "message": format!("Found {count} matching catalogue(s)."),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchCataloguesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Match one candidate against the keyword. Field preference on multiple
/// matches: title, then description, then id.
fn match_candidate(
    candidate: &CatalogueSummary,
    doc: &Value,
    keyword: &str,
) -> Option<SearchMatch> {
    let title = doc.get("title").and_then(Value::as_str);
    let description = doc.get("description").and_then(Value::as_str);

    let match_reason = if title.is_some_and(|t| t.to_lowercase().contains(keyword)) {
        "title"
    } else if description.is_some_and(|d| d.to_lowercase().contains(keyword)) {
        "description"
    } else if candidate.id.to_lowercase().contains(keyword) {
        "id"
    } else {
        return None;
    };

    Some(SearchMatch {
        id: candidate.id.clone(),
        title: title.map(str::to_string),
        match_reason: match_reason.to_string(),
    })
}
