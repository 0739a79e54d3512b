//! Long-lived HTTP client handles for the upstream APIs.
//!
//! Two collaborators are wrapped here: the open-data API serving catalogue
//! records, and the GitHub contents API serving per-catalogue metadata files.
//! Clients are built once at startup and shared across invocations; every
//! request carries the same fixed timeout.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::UpstreamConfig;
use super::error::Error;

const APP_USER_AGENT: &str = concat!("catalogue-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced by the upstream HTTP clients.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream returned a non-2xx response. The message is taken from
    /// the response body's `message` field when present, else the status.
    #[error("API request failed: {0}")]
    Api(String),

    /// Network-level failure: connection error, timeout, invalid URL.
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream body could not be interpreted (bad encoding, bad JSON).
    #[error("Failed to process request: {0}")]
    Payload(String),
}

/// Bundle of all upstream client handles, injected into the tool layer.
pub struct UpstreamClients {
    /// Client for the open-data API.
    pub data: DataGovClient,

    /// Client for the metadata repository.
    pub meta: MetadataRepoClient,
}

impl UpstreamClients {
    /// Build all clients from configuration. Fails on malformed base URLs.
    pub fn new(config: &UpstreamConfig) -> Result<Self, Error> {
        Ok(Self {
            data: DataGovClient::new(config)?,
            meta: MetadataRepoClient::new(config)?,
        })
    }
}

// ============================================================================
// Open-data API
// ============================================================================

/// Client for the open-data API (`/data-catalogue` endpoint).
pub struct DataGovClient {
    http: Client,
    catalogue_endpoint: Url,
}

impl DataGovClient {
    fn new(config: &UpstreamConfig) -> Result<Self, Error> {
        let base = Url::parse(&config.data_base_url)
            .map_err(|e| Error::config(format!("invalid data API base URL: {e}")))?;
        let catalogue_endpoint = base
            .join("/data-catalogue")
            .map_err(|e| Error::config(format!("invalid data API base URL: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("failed to build data API client: {e}")))?;

        Ok(Self {
            http,
            catalogue_endpoint,
        })
    }

    /// Fetch catalogue records, optionally scoped to one dataset id and a
    /// record limit. Absent parameters are not forwarded upstream.
    pub async fn get_catalogue(
        &self,
        id: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Value, UpstreamError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(id) = id {
            query.push(("id", id.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        debug!(endpoint = %self.catalogue_endpoint, ?query, "GET data catalogue");

        let mut request = self.http.get(self.catalogue_endpoint.clone());
        if !query.is_empty() {
            request = request.query(&query);
        }

        into_json(request.send().await?).await
    }
}

// ============================================================================
// Metadata repository
// ============================================================================

/// Client for the GitHub-hosted metadata repository.
///
/// Directory listings and single-file fetches go through the contents API
/// with the GitHub media type; raw per-file fetches use the `download_url`
/// returned by the listing and carry no special headers.
pub struct MetadataRepoClient {
    http: Client,
    raw: Client,
    contents_url: Url,
}

/// One entry of a repository directory listing, as returned by the
/// contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    pub name: String,

    /// "file" or "dir".
    #[serde(rename = "type")]
    pub entry_type: String,

    #[serde(default)]
    pub size: u64,

    /// Direct raw-content URL. Present for files, null for directories.
    pub download_url: Option<String>,
}

/// A single file fetched through the contents API, with its payload embedded
/// as a base64-encoded `content` field.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoFile {
    pub name: String,
    pub content: String,
    pub encoding: String,
}

impl RepoFile {
    /// Decode the embedded content and parse it as JSON.
    ///
    /// The contents API wraps base64 at 60 columns, so whitespace is
    /// stripped before decoding.
    pub fn decode_json(&self) -> Result<Value, UpstreamError> {
        if self.encoding != "base64" {
            return Err(UpstreamError::Payload(format!(
                "unexpected content encoding '{}' for {}",
                self.encoding, self.name
            )));
        }

        let cleaned: String = self.content.split_whitespace().collect();
        let bytes = STANDARD
            .decode(cleaned)
            .map_err(|e| UpstreamError::Payload(format!("invalid base64 content: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Payload(format!("metadata is not valid JSON: {e}")))
    }
}

impl MetadataRepoClient {
    fn new(config: &UpstreamConfig) -> Result<Self, Error> {
        let contents_url = Url::parse(&config.meta_contents_url)
            .map_err(|e| Error::config(format!("invalid metadata contents URL: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = &config.github_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::config(format!("invalid GitHub token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let timeout = Duration::from_secs(config.timeout_secs);

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("failed to build metadata client: {e}")))?;

        // Raw download URLs live outside the API host and need no headers.
        let raw = Client::builder()
            .timeout(timeout)
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("failed to build raw-content client: {e}")))?;

        Ok(Self {
            http,
            raw,
            contents_url,
        })
    }

    /// List the metadata directory.
    pub async fn list_entries(&self) -> Result<Vec<RepoEntry>, UpstreamError> {
        debug!(url = %self.contents_url, "GET metadata directory listing");
        into_json(self.http.get(self.contents_url.clone()).send().await?).await
    }

    /// Fetch a single file entry (content arrives base64-encoded).
    pub async fn fetch_entry(&self, file_name: &str) -> Result<RepoFile, UpstreamError> {
        let url = format!(
            "{}/{}",
            self.contents_url.as_str().trim_end_matches('/'),
            file_name
        );
        debug!(%url, "GET metadata file entry");
        into_json(self.http.get(url).send().await?).await
    }

    /// Fetch a raw per-file download URL and parse the body as JSON.
    pub async fn fetch_raw_json(&self, url: &str) -> Result<Value, UpstreamError> {
        debug!(%url, "GET raw metadata content");
        into_json(self.raw.get(url).send().await?).await
    }
}

// ============================================================================
// Response handling
// ============================================================================

/// Deserialize a successful response body, or extract an upstream error
/// message from a failed one.
async fn into_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(UpstreamError::Api(message));
    }

    Ok(response.json().await?)
}
