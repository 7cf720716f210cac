//! url_resolve and url_resolve_batch tool implementations.
//!
//! Resolves links found on a page against the page URL and returns canonical forms.

use linkcanon_core::{CanonConfig, Canonicalizer, LinkBatch, beautify};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WebError;

/// Input parameters for url_resolve tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlResolveParams {
    /// Canonical URL of the page the link was found on.
    pub base: String,

    /// Raw href as found in the page, possibly relative or malformed.
    pub link: String,

    /// Percent-encode `;`/`=` in the path and re-encode the query (server default if omitted).
    #[serde(default)]
    pub quote: Option<bool>,

    /// Reject links whose scheme is not allowed (server default if omitted).
    #[serde(default)]
    pub check_scheme: Option<bool>,
}

/// Output structure for url_resolve tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlResolveOutput {
    /// Canonical absolute URL, usable as a storage and deduplication key.
    pub canonical: String,
    /// Human-readable rendering of `canonical`, for display only.
    pub beautified: String,
}

/// Input parameters for url_resolve_batch tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlResolveBatchParams {
    /// Canonical URL of the page the links were found on.
    pub base: String,

    /// Raw hrefs in document order.
    pub links: Vec<String>,
}

/// Implementation of the url_resolve tool.
pub fn resolve_impl(config: &CanonConfig, params: &UrlResolveParams) -> Result<UrlResolveOutput, WebError> {
    let config = CanonConfig {
        quote: params.quote.unwrap_or(config.quote),
        check_scheme: params.check_scheme.unwrap_or(config.check_scheme),
        ..config.clone()
    };

    let canonical = Canonicalizer::new(&config).canonicalize_link(&params.base, &params.link)?;
    let beautified = beautify(&canonical);

    Ok(UrlResolveOutput { canonical, beautified })
}

/// Implementation of the url_resolve_batch tool.
pub fn resolve_batch_impl(canonicalizer: &Canonicalizer, params: &UrlResolveBatchParams) -> Result<LinkBatch, WebError> {
    canonicalizer.canonicalize_links(&params.base, params.links.iter().map(String::as_str)).map_err(WebError::from)
}
