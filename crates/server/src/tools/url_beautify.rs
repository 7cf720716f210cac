//! url_beautify tool implementation.
//!
//! Renders a canonical URL for humans. The result is never a valid storage key.

use linkcanon_core::beautify;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for url_beautify tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlBeautifyParams {
    /// Canonical URL to render.
    pub url: String,
}

/// Output structure for url_beautify tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlBeautifyOutput {
    /// Display form with decoded path and internationalized host.
    pub url: String,
}

/// Implementation of the url_beautify tool.
pub fn beautify_impl(params: &UrlBeautifyParams) -> UrlBeautifyOutput {
    UrlBeautifyOutput { url: beautify(&params.url) }
}
