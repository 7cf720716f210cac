//! linkcanon MCP server entry point.
//!
//! Boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use linkcanon_core::CanonConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = CanonConfig::load()?;

    tracing::info!(
        allowed_schemes = ?config.allowed_schemes,
        quote = config.quote,
        check_scheme = config.check_scheme,
        "Starting linkcanon server on stdio transport"
    );

    let handler = handler::LinkCanonServer::new(config);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
