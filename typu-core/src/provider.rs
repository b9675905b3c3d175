//! Catalog resolution: remote webfonts API with bundled fallback
//! (made by FontLab https://www.fontlab.com/)

use std::borrow::Cow;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::bundled;
use crate::catalog::{FontRecord, WebfontsSnapshot};

/// Catalog endpoint of the webfonts API. The caller's key is appended as
/// the `key` query parameter.
pub const WEBFONTS_API_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Fetches a URL body. Abstraction for testing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET the URL and return the response body as a string.
    async fn get(&self, url: &str) -> Result<String>;
}

/// Reqwest-based HTTP client.
pub struct ReqwestHttpClient;

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<String> {
        let response = reqwest::Client::new().get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            bail!("webfonts API returned {status}: {body}");
        }

        Ok(body)
    }
}

/// How a catalog should be resolved for one call.
///
/// The default asks for the freshest data available: with an API key the
/// provider goes to the network, without one it stays on the bundled
/// snapshot. `fetch_latest(false)` pins a call to the snapshot even when a
/// key is present.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub api_key: Option<String>,
    pub fetch_latest: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            fetch_latest: true,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn fetch_latest(mut self, yes: bool) -> Self {
        self.fetch_latest = yes;
        self
    }
}

/// Resolve a catalog, issuing at most one outbound request.
///
/// Any failure on the remote path (transport, non-2xx status, malformed
/// body) is logged and recovered by falling back to the bundled snapshot;
/// it is never surfaced to the caller. A malformed bundled snapshot is the
/// only resolution error that propagates.
pub async fn resolve_catalog(
    options: &ResolveOptions,
    http: &dyn HttpClient,
) -> Result<Cow<'static, [FontRecord]>> {
    if let (Some(key), true) = (&options.api_key, options.fetch_latest) {
        match fetch_remote(key, http).await {
            Ok(items) => return Ok(Cow::Owned(items)),
            Err(err) => warn!(
                "failed to fetch latest webfonts catalog, falling back to bundled snapshot: {err:#}"
            ),
        }
    }

    Ok(Cow::Borrowed(bundled::catalog()?))
}

async fn fetch_remote(api_key: &str, http: &dyn HttpClient) -> Result<Vec<FontRecord>> {
    let url = format!("{WEBFONTS_API_URL}?key={api_key}");
    let body = http.get(&url).await?;
    let snapshot: WebfontsSnapshot = serde_json::from_str(&body)?;
    Ok(snapshot.items)
}
