//! url_parse and url_normalize_path tool implementations.
//!
//! Expose the tokenizer and dot-segment removal for inspecting how a link is read.

use linkcanon_core::{ParsedUrl, UrlKind, normalize_path, parse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for url_parse tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlParseParams {
    /// Raw URL or href to tokenize.
    pub url: String,
}

/// Output structure for url_parse tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlParseOutput {
    /// The six components, empty strings for absent ones.
    pub components: ParsedUrl,
    /// Absolute, network-path or relative.
    pub kind: UrlKind,
}

/// Input parameters for url_normalize_path tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlNormalizePathParams {
    /// A URL path such as `/b/c/../g`.
    pub path: String,
}

/// Output structure for url_normalize_path tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlNormalizePathOutput {
    /// The path with dot-segments removed.
    pub path: String,
}

/// Implementation of the url_parse tool.
pub fn parse_impl(params: &UrlParseParams) -> UrlParseOutput {
    let components = parse(&params.url);
    let kind = components.kind();

    UrlParseOutput { components, kind }
}

/// Implementation of the url_normalize_path tool.
pub fn normalize_path_impl(params: &UrlNormalizePathParams) -> UrlNormalizePathOutput {
    UrlNormalizePathOutput { path: normalize_path(&params.path) }
}
