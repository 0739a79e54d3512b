//! Common utilities shared across tool definitions.
//!
//! This module provides the response envelope, required-parameter checks,
//! and the catalogue summary mapping used by the metadata tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::core::upstream::RepoEntry;
use crate::domains::tools::ToolError;

/// File suffix of catalogue metadata entries in the repository.
pub const METADATA_SUFFIX: &str = ".json";

/// Wrap a domain payload in the uniform response envelope: exactly one text
/// content block whose text is pretty-printed JSON.
pub fn envelope_result(payload: Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| ToolError::internal(format!("failed to serialize response: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Reject empty or whitespace-only values for required string parameters.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "Missing required parameter: {field}"
        )));
    }
    Ok(())
}

/// Catalogue summary derived from a repository file entry.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CatalogueSummary {
    /// Catalogue id: the file name with the metadata suffix stripped.
    pub id: String,

    /// Full file name in the repository.
    pub name: String,

    /// Direct raw-content URL for the metadata file.
    pub download_url: String,

    /// File size in bytes.
    pub size: u64,
}

impl CatalogueSummary {
    /// Map a repository entry to a summary. Directories and files without
    /// the metadata suffix are skipped.
    pub fn from_entry(entry: &RepoEntry) -> Option<Self> {
        if entry.entry_type != "file" {
            return None;
        }
        let id = entry.name.strip_suffix(METADATA_SUFFIX)?;
        let download_url = entry.download_url.clone()?;

        Some(Self {
            id: id.to_string(),
            name: entry.name.clone(),
            download_url,
            size: entry.size,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::{CallToolResult, RawContent};
    use serde_json::Value;

    use crate::core::config::UpstreamConfig;
    use crate::core::upstream::UpstreamClients;

    /// Build upstream clients pointed at a mock server. The metadata
    /// contents directory is mounted under `/contents`.
    pub fn upstream_for(base_url: &str) -> UpstreamClients {
        let config = UpstreamConfig {
            data_base_url: base_url.to_string(),
            meta_contents_url: format!("{base_url}/contents"),
            github_token: None,
            timeout_secs: 10,
        };
        UpstreamClients::new(&config).expect("mock upstream clients")
    }

    /// Extract and parse the single-content-block JSON envelope.
    pub fn envelope_json(result: &CallToolResult) -> Value {
        assert_eq!(result.content.len(), 1, "expected exactly one content block");
        match &result.content[0].raw {
            RawContent::Text(text) => {
                serde_json::from_str(&text.text).expect("envelope text is valid JSON")
            }
            other => panic!("unexpected content block: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, entry_type: &str, url: Option<&str>) -> RepoEntry {
        serde_json::from_value(json!({
            "name": name,
            "type": entry_type,
            "size": 128,
            "download_url": url,
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_strips_suffix() {
        let summary =
            CatalogueSummary::from_entry(&entry("air_pollution.json", "file", Some("http://x/a")))
                .unwrap();
        assert_eq!(summary.id, "air_pollution");
        assert_eq!(summary.name, "air_pollution.json");
        assert_eq!(summary.size, 128);
    }

    #[test]
    fn test_summary_skips_directories_and_non_json() {
        assert!(CatalogueSummary::from_entry(&entry("archive", "dir", None)).is_none());
        assert!(CatalogueSummary::from_entry(&entry("README.txt", "file", Some("http://x/r"))).is_none());
    }

    #[test]
    fn test_envelope_is_single_text_block_of_valid_json() {
        let result = envelope_result(json!({"message": "ok", "count": 0})).unwrap();
        assert_eq!(result.content.len(), 1);
        let parsed = test_support::envelope_json(&result);
        assert_eq!(parsed["message"], "ok");
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("abc", "id").is_ok());
        let err = require_non_empty("  ", "id").unwrap_err();
        assert!(err.to_string().contains("id"));
    }
}
