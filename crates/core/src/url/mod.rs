//! URL canonicalization for crawl deduplication and storage identity.
//!
//! Links pulled out of crawled pages go through three stages: [`parse()`] tokenizes
//! the raw href, [`resolve()`] applies it to the page URL and [`canonicalize()`]
//! serializes the result. [`resolve_and_canonicalize`] chains them and is what
//! link extraction calls. [`beautify()`] is the display-side inverse and never
//! produces keys.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::CanonConfig;
use crate::error::Error;

mod authority;
mod beautify;
mod canonical;
mod parse;
mod path;
mod resolve;

pub use beautify::beautify;
pub use canonical::canonicalize;
pub use parse::parse;
pub use path::normalize_path;
pub use resolve::resolve;

pub(crate) use parse::is_scheme;

/// Schemes accepted when scheme checking is requested.
pub const DEFAULT_ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A URL split into its six components.
///
/// Every component is stored without its delimiter, an empty string standing for
/// "absent". `params` is the `;...` tail of the last path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedUrl {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Reference classification by which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UrlKind {
    /// Scheme and authority, e.g. `http://a/b`.
    Absolute,
    /// Authority without scheme, e.g. `//a/b`.
    NetworkPath,
    /// No authority, e.g. `../b`, `?q` or `mailto:x`.
    Relative,
}

impl ParsedUrl {
    pub fn kind(&self) -> UrlKind {
        match (self.scheme.is_empty(), self.authority.is_empty()) {
            (false, false) => UrlKind::Absolute,
            (true, false) => UrlKind::NetworkPath,
            (_, true) => UrlKind::Relative,
        }
    }

    /// Shorthand for [`canonicalize()`].
    pub fn to_canonical(&self, quote: bool) -> String {
        canonicalize(self, quote)
    }
}

/// Resolve `link` against `base` and serialize the canonical form.
///
/// With `check_scheme`, links resolving to anything but `http`/`https` are rejected
/// with [`Error::UnsupportedScheme`] so the caller can skip them, and links such as
/// `http:` on an https page that end up without a host with [`Error::InvalidInput`].
pub fn resolve_and_canonicalize(base: &str, link: &str, quote: bool, check_scheme: bool) -> Result<String, Error> {
    let resolved = resolve(&parse(base), &parse(link));

    if check_scheme {
        if !DEFAULT_ALLOWED_SCHEMES.contains(&resolved.scheme.as_str()) {
            tracing::debug!(base, link, scheme = %resolved.scheme, "skipping link with unsupported scheme");
            return Err(Error::UnsupportedScheme(resolved.scheme));
        }
        require_host(&resolved, link)?;
    }

    Ok(canonicalize(&resolved, quote))
}

/// Hierarchical schemes are only usable as keys with an authority.
fn require_host(resolved: &ParsedUrl, link: &str) -> Result<(), Error> {
    if resolved.authority.is_empty() && resolve::is_hierarchical(&resolved.scheme) {
        tracing::debug!(link, scheme = %resolved.scheme, "skipping link without host");
        return Err(Error::InvalidInput(format!("no host in {link:?}")));
    }
    Ok(())
}

/// A link that was not admitted, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RejectedLink {
    pub link: String,
    pub reason: String,
}

/// Outcome of canonicalizing all links found on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinkBatch {
    /// Canonical links, deduplicated, in first-seen order.
    pub accepted: Vec<String>,
    pub rejected: Vec<RejectedLink>,
}

/// Canonicalization with the options of a [`CanonConfig`].
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    allowed_schemes: Vec<String>,
    quote: bool,
    check_scheme: bool,
    keep_fragment: bool,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(&CanonConfig::default())
    }
}

impl Canonicalizer {
    pub fn new(config: &CanonConfig) -> Self {
        Self {
            allowed_schemes: config.allowed_schemes.iter().map(|s| s.to_ascii_lowercase()).collect(),
            quote: config.quote,
            check_scheme: config.check_scheme,
            keep_fragment: config.keep_fragment,
        }
    }

    /// Whether `scheme` passes the allow-list. Always true when scheme checking is off.
    pub fn allows(&self, scheme: &str) -> bool {
        !self.check_scheme || self.allowed_schemes.iter().any(|allowed| allowed == scheme)
    }

    /// Canonical form of `link` found on the page at `base`.
    ///
    /// An empty `base` is [`Error::InvalidInput`]: there is no page to resolve against.
    pub fn canonicalize_link(&self, base: &str, link: &str) -> Result<String, Error> {
        self.canonicalize_parsed(&parse_base(base)?, link)
    }

    /// Canonicalize every link of a page, dropping duplicates and rejected links.
    ///
    /// Fails only on an empty `base`; per-link failures land in [`LinkBatch::rejected`].
    pub fn canonicalize_links<'a, I>(&self, base: &str, links: I) -> Result<LinkBatch, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let base = parse_base(base)?;
        let mut seen = HashSet::new();
        let mut batch = LinkBatch::default();

        for link in links {
            match self.canonicalize_parsed(&base, link) {
                Ok(canonical) => {
                    if seen.insert(canonical.clone()) {
                        batch.accepted.push(canonical);
                    }
                }
                Err(err) => batch.rejected.push(RejectedLink { link: link.to_string(), reason: err.to_string() }),
            }
        }

        tracing::debug!(
            accepted = batch.accepted.len(),
            rejected = batch.rejected.len(),
            "canonicalized page links"
        );

        Ok(batch)
    }

    fn canonicalize_parsed(&self, base: &ParsedUrl, link: &str) -> Result<String, Error> {
        let resolved = resolve(base, &parse(link));

        if !self.allows(&resolved.scheme) {
            tracing::debug!(link, scheme = %resolved.scheme, "skipping link with unsupported scheme");
            return Err(Error::UnsupportedScheme(resolved.scheme));
        }
        if self.check_scheme {
            require_host(&resolved, link)?;
        }

        let resolved = if self.keep_fragment { resolved } else { ParsedUrl { fragment: String::new(), ..resolved } };

        Ok(canonicalize(&resolved, self.quote))
    }
}

fn parse_base(base: &str) -> Result<ParsedUrl, Error> {
    if base.trim().is_empty() {
        return Err(Error::InvalidInput("base cannot be empty".to_string()));
    }
    Ok(parse(base))
}
