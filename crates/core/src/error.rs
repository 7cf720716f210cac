//! Error types for link canonicalization.
//!
//! Malformed links are never an error: the parser and resolver are total.
//! Rejections only happen at the scheme-checking gate and on an empty base.

/// Errors surfaced by the canonicalization entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The resolved link uses a scheme the crawler does not follow (e.g. `mailto:`).
    ///
    /// Holds the lowercased scheme, empty when the link resolved without any scheme.
    #[error("UNSUPPORTED_SCHEME: {0}")]
    UnsupportedScheme(String),

    /// Input that cannot yield a key: an empty base URL, or an `http:`-like link left without a host.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Stable machine-readable code, the prefix of the display form.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedScheme(_) => "UNSUPPORTED_SCHEME",
            Error::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}
