//! Family lookup entry point (made by FontLab https://www.fontlab.com/)

use anyhow::{anyhow, Result};

use crate::catalog::find_family;
use crate::css2::stylesheet_url;
use crate::provider::{resolve_catalog, HttpClient, ReqwestHttpClient, ResolveOptions};

/// Resolve a family name to a css2 stylesheet URL.
///
/// Resolves a catalog per `options` (remote API when a key is supplied and
/// `fetch_latest` holds, bundled snapshot otherwise), finds the first
/// record matching `family` exactly, and formats it.
///
/// Fails for an empty family, a family absent from the resolved catalog,
/// or a malformed bundled snapshot. Remote fetch failures never surface
/// here; they degrade to the snapshot inside the provider.
pub async fn font_url(family: &str, options: &ResolveOptions) -> Result<String> {
    font_url_with_client(family, options, &ReqwestHttpClient).await
}

/// Like [`font_url`], with an injected HTTP client.
pub async fn font_url_with_client(
    family: &str,
    options: &ResolveOptions,
    http: &dyn HttpClient,
) -> Result<String> {
    if family.is_empty() {
        return Err(anyhow!("font family must be a non-empty string"));
    }

    let catalog = resolve_catalog(options, http).await?;
    let record = find_family(&catalog, family)
        .ok_or_else(|| anyhow!("font family {family:?} not found in the webfonts catalog"))?;

    Ok(stylesheet_url(record))
}
