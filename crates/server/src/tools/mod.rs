//! MCP tool implementations.
//!
//! This module contains all tools exposed by the linkcanon server.

pub mod url_beautify;
pub mod url_parse;
pub mod url_resolve;

pub use url_beautify::{UrlBeautifyParams, beautify_impl};
pub use url_parse::{UrlNormalizePathParams, UrlParseParams, normalize_path_impl, parse_impl};
pub use url_resolve::{UrlResolveBatchParams, UrlResolveParams, resolve_batch_impl, resolve_impl};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::error::WebError;

/// Serialize a tool output as pretty JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| WebError::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
