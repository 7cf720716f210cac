//! Structured errors for the linkcanon server.
//!
//! Each variant maps to a stable JSON-RPC error code.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Structured errors for the linkcanon server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Invalid input parameters (e.g., empty base URL).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The resolved link uses a scheme outside the allow-list.
    #[error("UNSUPPORTED_SCHEME: {0}")]
    UnsupportedScheme(String),
}

impl From<linkcanon_core::Error> for WebError {
    fn from(err: linkcanon_core::Error) -> Self {
        match err {
            linkcanon_core::Error::UnsupportedScheme(scheme) => WebError::UnsupportedScheme(scheme),
            linkcanon_core::Error::InvalidInput(msg) => WebError::InvalidInput(msg),
        }
    }
}

impl From<WebError> for McpError {
    fn from(err: WebError) -> Self {
        let (code, message) = match &err {
            WebError::InvalidInput(msg) => (-32602, msg.clone()),
            WebError::UnsupportedScheme(_) => (-32020, err.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
