//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    UrlBeautifyParams, UrlNormalizePathParams, UrlParseParams, UrlResolveBatchParams, UrlResolveParams,
    beautify_impl, json_result, normalize_path_impl, parse_impl, resolve_batch_impl, resolve_impl,
};
use linkcanon_core::{CanonConfig, Canonicalizer};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for linkcanon.
#[derive(Clone)]
pub struct LinkCanonServer {
    config: CanonConfig,
    canonicalizer: Canonicalizer,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl LinkCanonServer {
    /// Create a new server handler with the loaded configuration.
    pub fn new(config: CanonConfig) -> Self {
        let canonicalizer = Canonicalizer::new(&config);
        Self { config, canonicalizer, tool_router: Self::tool_router() }
    }

    /// Resolve one link against the page it was found on.
    #[tool(
        description = "Resolve a link against a base URL and return its canonical form (the crawler's deduplication key) plus a display form."
    )]
    async fn url_resolve(&self, params: Parameters<UrlResolveParams>) -> Result<CallToolResult, McpError> {
        json_result(&resolve_impl(&self.config, &params.0)?)
    }

    /// Resolve every link of a page, dropping duplicates and disallowed schemes.
    #[tool(
        description = "Resolve all links found on a page. Returns deduplicated canonical links and the rejected ones with a reason."
    )]
    async fn url_resolve_batch(&self, params: Parameters<UrlResolveBatchParams>) -> Result<CallToolResult, McpError> {
        json_result(&resolve_batch_impl(&self.canonicalizer, &params.0)?)
    }

    /// Tokenize a URL into its components.
    #[tool(description = "Split a URL or href into scheme, authority, path, params, query and fragment.")]
    async fn url_parse(&self, params: Parameters<UrlParseParams>) -> Result<CallToolResult, McpError> {
        json_result(&parse_impl(&params.0))
    }

    /// Remove dot-segments from a path.
    #[tool(description = "Remove '.' and '..' segments from a URL path. Excess '..' stop at the root.")]
    async fn url_normalize_path(&self, params: Parameters<UrlNormalizePathParams>) -> Result<CallToolResult, McpError> {
        json_result(&normalize_path_impl(&params.0))
    }

    /// Render a canonical URL for humans.
    #[tool(
        description = "Decode percent-encoded UTF-8 and punycode hosts of a URL for display. Never use the result as a key."
    )]
    async fn url_beautify(&self, params: Parameters<UrlBeautifyParams>) -> Result<CallToolResult, McpError> {
        json_result(&beautify_impl(&params.0))
    }
}

impl ServerHandler for LinkCanonServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "linkcanon".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
