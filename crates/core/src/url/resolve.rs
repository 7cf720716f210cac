//! RFC 3986 §5.3 reference resolution.
//!
//! One convention departs from the RFC: a hierarchical scheme followed directly by
//! a host (`http:h`) is read as `http://h/` instead of a scheme-qualified path.

use super::{ParsedUrl, normalize_path};

/// Schemes whose URLs always carry an authority.
const HIERARCHICAL_SCHEMES: [&str; 5] = ["http", "https", "ftp", "ws", "wss"];

/// Resolve `reference` against `base`, producing an absolute URL when `base` is absolute.
///
/// The fragment always comes from `reference`.
pub fn resolve(base: &ParsedUrl, reference: &ParsedUrl) -> ParsedUrl {
    if reference.scheme.is_empty() {
        return resolve_schemeless(base, reference);
    }

    if !reference.authority.is_empty() || !is_hierarchical(&reference.scheme) {
        return ParsedUrl { path: normalize_path(&reference.path), ..reference.clone() };
    }

    let (authority, path) = promote_authority(&reference.path);
    if !authority.is_empty() {
        return ParsedUrl { authority: authority.to_string(), path: normalize_path(path), ..reference.clone() };
    }

    if reference.scheme == base.scheme {
        // `http:` or `http:?x` on an http page, RFC 3986 §5.2.2 non-strict mode
        return resolve_schemeless(base, &ParsedUrl { scheme: String::new(), ..reference.clone() });
    }

    ParsedUrl { path: normalize_path(&reference.path), ..reference.clone() }
}

pub(crate) fn is_hierarchical(scheme: &str) -> bool {
    HIERARCHICAL_SCHEMES.contains(&scheme)
}

/// `h/x` or `/h/x` become authority `h` and path `/x`.
fn promote_authority(path: &str) -> (&str, &str) {
    let stripped = path.trim_start_matches('/');
    match stripped.find('/') {
        Some(idx) => stripped.split_at(idx),
        None => (stripped, ""),
    }
}

fn resolve_schemeless(base: &ParsedUrl, reference: &ParsedUrl) -> ParsedUrl {
    let fragment = reference.fragment.clone();

    if !reference.authority.is_empty() {
        return ParsedUrl {
            scheme: base.scheme.clone(),
            authority: reference.authority.clone(),
            path: normalize_path(&reference.path),
            params: reference.params.clone(),
            query: reference.query.clone(),
            fragment,
        };
    }

    if reference.path.is_empty() && reference.params.is_empty() {
        let query = if reference.query.is_empty() { base.query.clone() } else { reference.query.clone() };
        return ParsedUrl { query, fragment, ..base.clone() };
    }

    let path = if reference.path.starts_with('/') {
        normalize_path(&reference.path)
    } else {
        normalize_path(&merge(base, &reference.path))
    };

    ParsedUrl {
        scheme: base.scheme.clone(),
        authority: base.authority.clone(),
        path,
        params: reference.params.clone(),
        query: reference.query.clone(),
        fragment,
    }
}

/// RFC 3986 §5.2.3: everything in the base path up to its last `/`, then `path`.
fn merge(base: &ParsedUrl, path: &str) -> String {
    if !base.authority.is_empty() && base.path.is_empty() {
        return format!("/{path}");
    }

    match base.path.rfind('/') {
        Some(idx) => format!("{}{path}", &base.path[..=idx]),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::parse;

    fn resolve_str(base: &str, link: &str) -> ParsedUrl {
        resolve(&parse(base), &parse(link))
    }

    #[test]
    fn test_resolve_absolute_reference() {
        let url = resolve_str("http://a/b/c/d;p?q", "https://x/y/../z?k#f");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.authority, "x");
        assert_eq!(url.path, "/z");
        assert_eq!(url.query, "k");
        assert_eq!(url.fragment, "f");
    }

    #[test]
    fn test_resolve_promotes_host() {
        let url = resolve_str("http://a/b/c/d;p?q", "http:h");
        assert_eq!(url.scheme, "http");
        assert_eq!(url.authority, "h");
        assert_eq!(url.path, "");

        let url = resolve_str("http://a/", "https:/h/x/../y");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.authority, "h");
        assert_eq!(url.path, "/y");
    }

    #[test]
    fn test_resolve_same_scheme_without_host_is_relative() {
        let url = resolve_str("http://a/b/c/d;p?q", "http:?y");
        assert_eq!(url.authority, "a");
        assert_eq!(url.path, "/b/c/d");
        assert_eq!(url.params, "p");
        assert_eq!(url.query, "y");
    }

    #[test]
    fn test_resolve_opaque_scheme_untouched() {
        let url = resolve_str("http://a/b/", "mailto:user@example.com");
        assert_eq!(url.scheme, "mailto");
        assert_eq!(url.authority, "");
        assert_eq!(url.path, "user@example.com");
    }

    #[test]
    fn test_resolve_network_path() {
        let url = resolve_str("https://a/b/c", "//g/x/./y");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.authority, "g");
        assert_eq!(url.path, "/x/y");
    }

    #[test]
    fn test_resolve_empty_reference_keeps_base() {
        let base = parse("http://a/b/c/d;p?q");
        assert_eq!(resolve(&base, &parse("")), base);
    }

    #[test]
    fn test_resolve_query_only() {
        let url = resolve_str("http://a/b/c/d;p?q", "?y");
        assert_eq!(url.path, "/b/c/d");
        assert_eq!(url.params, "p");
        assert_eq!(url.query, "y");
    }

    #[test]
    fn test_resolve_fragment_only_keeps_base_query() {
        let url = resolve_str("http://a/b/c/d;p?q", "#s");
        assert_eq!(url.query, "q");
        assert_eq!(url.fragment, "s");
    }

    #[test]
    fn test_resolve_fragment_never_inherited() {
        let url = resolve_str("http://a/b/c#top", "g");
        assert_eq!(url.fragment, "");

        let url = resolve_str("http://a/b/c?q#top", "");
        assert_eq!(url.fragment, "");
    }

    #[test]
    fn test_resolve_params_only_reference_merges() {
        let url = resolve_str("http://a/b/c/d;p?q", ";x");
        assert_eq!(url.path, "/b/c/");
        assert_eq!(url.params, "x");
        assert_eq!(url.query, "");
    }

    #[test]
    fn test_resolve_absolute_path() {
        let url = resolve_str("http://127.0.0.1/dir1/", "/page.html");
        assert_eq!(url.path, "/page.html");
    }

    #[test]
    fn test_resolve_merge_against_bare_authority() {
        let url = resolve_str("http://a", "g");
        assert_eq!(url.path, "/g");
    }

    #[test]
    fn test_resolve_merge_relative_base() {
        let url = resolve_str("b/c", "d");
        assert_eq!(url.authority, "");
        assert_eq!(url.path, "b/d");

        let url = resolve_str("c", "d");
        assert_eq!(url.path, "d");
    }

    #[test]
    fn test_resolve_parent_above_root() {
        let url = resolve_str("http://a/b/c/d;p?q", "../../../../g");
        assert_eq!(url.path, "/g");
    }
}
